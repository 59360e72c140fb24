//! Serializable layout reports and plain-text bills of materials

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::algorithm::placement::Placement;
use crate::analysis::statistics::{SizeCount, TilingResult};
use crate::io::error::{LayoutError, Result};
use crate::spatial::grid::CellCount;

/// Summary of one optimized layout, as written next to its source
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Source width in cells, before upsampling
    pub source_width: usize,
    /// Source height in cells, before upsampling
    pub source_height: usize,
    /// Upsampling factor applied
    pub scale: usize,
    /// Tiled grid width in cells
    pub width: usize,
    /// Tiled grid height in cells
    pub height: usize,
    /// Cell tallies, i.e. the all-1x1 bill of materials
    pub cells: CellCount,
    /// Foreground tiles grouped by size
    pub foreground: Vec<SizeCount>,
    /// Background tiles grouped by size
    pub background: Vec<SizeCount>,
    /// Foreground tiles placed
    pub foreground_total: usize,
    /// Background tiles placed
    pub background_total: usize,
    /// All tiles placed
    pub total: usize,
    /// Whole-percent reduction versus the all-1x1 layout
    pub savings_percent: i64,
    /// Placements in commit order
    pub placements: Vec<Placement>,
}

impl LayoutReport {
    /// Assemble a report from a finished run
    pub fn new(
        source_width: usize,
        source_height: usize,
        scale: usize,
        width: usize,
        height: usize,
        result: TilingResult,
    ) -> Self {
        Self {
            source_width,
            source_height,
            scale,
            width,
            height,
            cells: result.cell_count,
            foreground: result.foreground,
            background: result.background,
            foreground_total: result.foreground_total,
            background_total: result.background_total,
            total: result.total,
            savings_percent: result.savings_percent,
            placements: result.placements,
        }
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails
    pub fn to_json(&self, path: &Path) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Serialization {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the JSON encoding to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json(path)?;
        std::fs::write(path, json).map_err(|e| LayoutError::FileSystem {
            path: path.to_path_buf(),
            operation: "write report",
            source: e,
        })
    }

    /// Plain-text bill of materials
    pub fn bill_of_materials(&self) -> String {
        bill_of_materials(
            &self.foreground,
            &self.background,
            self.cells.total,
            self.total,
            self.savings_percent,
        )
    }
}

/// Render grouped counts as a bill of materials
///
/// One `WxH x N` line per size and color, followed by totals and savings.
pub fn bill_of_materials(
    foreground: &[SizeCount],
    background: &[SizeCount],
    cell_total: usize,
    tile_total: usize,
    savings_percent: i64,
) -> String {
    let mut out = String::new();

    for (label, counts) in [("Foreground", foreground), ("Background", background)] {
        let subtotal: usize = counts.iter().map(|c| c.count).sum();
        let _ = writeln!(out, "{label} ({subtotal}):");
        for count in counts {
            let _ = writeln!(out, "  {}x{} x {}", count.width, count.height, count.count);
        }
    }

    let _ = writeln!(
        out,
        "Total: {tile_total} tiles for {cell_total} cells ({savings_percent}% saved)"
    );
    out
}
