//! Immutable two-color grid and per-color cell tallies
//!
//! Cells are stored row-major with the origin at the top-left corner. A cell
//! is `true` for foreground and `false` for background.

use ndarray::{Array2, Axis, Slice};
use serde::Serialize;

use crate::io::error::{LayoutError, Result};

/// Number of foreground and background cells in a grid
///
/// Equivalent to the tile count of a layout built only from 1x1 tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellCount {
    /// Cells holding `true`
    pub foreground: usize,
    /// Cells holding `false`
    pub background: usize,
    /// All cells
    pub total: usize,
}

/// Rectangular boolean matrix of `height` rows by `width` columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Indexed as `(row, col)`, i.e. `(y, x)`
    cells: Array2<bool>,
}

impl Grid {
    /// Build a grid from row vectors
    ///
    /// An empty slice yields the 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if any row differs in length from the first
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(LayoutError::MalformedGrid {
                row,
                expected: width,
                found,
            });
        }

        let cells = Array2::from_shape_fn((rows.len(), width), |(y, x)| {
            rows.get(y)
                .and_then(|row| row.as_ref().get(x))
                .copied()
                .unwrap_or(false)
        });

        Ok(Self { cells })
    }

    /// Grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: bool) -> Self {
        Self {
            cells: Array2::from_elem((height, width), value),
        }
    }

    /// Wrap an existing `(rows, cols)` array
    pub const fn from_array(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell color at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.cells.get((y, x)).copied()
    }

    /// Underlying `(rows, cols)` array
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Copy the grid back out as row vectors
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Tally foreground and background cells
    pub fn cell_count(&self) -> CellCount {
        let foreground = self.cells.iter().filter(|&&cell| cell).count();
        let total = self.cells.len();

        CellCount {
            foreground,
            background: total - foreground,
            total,
        }
    }

    /// Whether every cell of the `width` x `height` rectangle at `(x, y)` has `color`
    ///
    /// Rectangles that leave the grid are never uniform.
    pub fn is_uniform(&self, x: usize, y: usize, width: usize, height: usize, color: bool) -> bool {
        let (Some(x_end), Some(y_end)) = (x.checked_add(width), y.checked_add(height)) else {
            return false;
        };
        if x_end > self.width() || y_end > self.height() {
            return false;
        }

        self.cells
            .slice_axis(Axis(0), Slice::from(y..y_end))
            .slice_axis(Axis(1), Slice::from(x..x_end))
            .iter()
            .all(|&cell| cell == color)
    }
}
