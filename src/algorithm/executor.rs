//! Greedy row-major tiling of a two-color grid
//!
//! Cells are visited top to bottom, left to right. Each uncovered cell
//! becomes the top-left corner of the first tile that fits, walking the
//! catalog for that cell's color largest-first and trying each size as
//! supplied before its transpose. The 1x1 tile closing every catalog makes
//! every uncovered cell placeable, so one pass covers the whole grid.

use std::convert::Infallible;
use std::ops::ControlFlow;

use crate::algorithm::coverage::CoverageState;
use crate::algorithm::placement::{Placement, can_place};
use crate::analysis::statistics::TilingResult;
use crate::io::error::{LayoutError, Result};
use crate::spatial::{Grid, TileCatalog, TileSize};

/// Single-use greedy tiler borrowing its grid and catalogs
///
/// Owns the coverage state and placement list for the duration of one run.
pub struct TilingEngine<'a> {
    grid: &'a Grid,
    foreground: &'a TileCatalog,
    background: &'a TileCatalog,
    coverage: CoverageState,
    placements: Vec<Placement>,
}

impl<'a> TilingEngine<'a> {
    /// Prepare a run over `grid` with one catalog per color
    pub fn new(grid: &'a Grid, foreground: &'a TileCatalog, background: &'a TileCatalog) -> Self {
        Self {
            grid,
            foreground,
            background,
            coverage: CoverageState::new(grid.width(), grid.height()),
            placements: Vec::new(),
        }
    }

    /// Scan the whole grid and produce the result
    pub fn run(self) -> TilingResult {
        match self.run_with_row_check(|_| ControlFlow::<Infallible>::Continue(())) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Scan the grid, consulting `check` before every row
    ///
    /// `check` receives the row about to be scanned. Breaking abandons the
    /// run; no partial layout is returned.
    ///
    /// # Errors
    ///
    /// Returns the value `check` broke with
    pub fn run_with_row_check<E, F>(mut self, mut check: F) -> std::result::Result<TilingResult, E>
    where
        F: FnMut(usize) -> ControlFlow<E>,
    {
        let (width, height) = (self.grid.width(), self.grid.height());

        for y in 0..height {
            if let ControlFlow::Break(reason) = check(y) {
                tracing::debug!(row = y, "tiling cancelled");
                return Err(reason);
            }

            for x in 0..width {
                if self.coverage.is_covered(x, y) {
                    continue;
                }
                self.place_at(x, y);
            }
        }

        debug_assert!(self.coverage.is_complete());

        let result = TilingResult::from_placements(self.placements, self.grid.cell_count());
        tracing::debug!(
            width,
            height,
            tiles = result.total,
            savings = result.savings_percent,
            "tiling complete"
        );
        Ok(result)
    }

    fn place_at(&mut self, x: usize, y: usize) {
        let Some(color) = self.grid.get(x, y) else {
            return;
        };
        let catalog = if color {
            self.foreground
        } else {
            self.background
        };

        let chosen = catalog
            .iter()
            .flat_map(TileSize::orientations)
            .find(|&(w, h)| can_place(self.grid, &self.coverage, x, y, w, h, color))
            // A catalog always ends in 1x1, and an uncovered cell always takes it
            .unwrap_or((1, 1));

        let (width, height) = chosen;
        self.coverage.cover(x, y, width, height);
        self.placements.push(Placement {
            x,
            y,
            width,
            height,
            is_foreground: color,
        });
    }
}

/// Tile `grid`, using `foreground` for `true` cells and `background` for `false` cells
pub fn tile(grid: &Grid, foreground: &TileCatalog, background: &TileCatalog) -> TilingResult {
    TilingEngine::new(grid, foreground, background).run()
}

/// Tile `grid` with a cooperative cancellation check between rows
///
/// `check` is called with each row index before that row is scanned.
///
/// # Errors
///
/// Returns `Cancelled` with the row at which `check` broke
pub fn tile_with_row_check<F>(
    grid: &Grid,
    foreground: &TileCatalog,
    background: &TileCatalog,
    mut check: F,
) -> Result<TilingResult>
where
    F: FnMut(usize) -> ControlFlow<()>,
{
    TilingEngine::new(grid, foreground, background).run_with_row_check(|row| match check(row) {
        ControlFlow::Continue(()) => ControlFlow::Continue(()),
        ControlFlow::Break(()) => ControlFlow::Break(LayoutError::Cancelled { row }),
    })
}

/// Validate raw rows and tile sizes, then tile
///
/// Every precondition is checked before any cell is covered.
///
/// # Errors
///
/// Returns `MalformedGrid` for ragged rows, or `InvalidTileSize` for a size
/// with a zero dimension
pub fn optimize_rows<R: AsRef<[bool]>>(
    rows: &[R],
    foreground_sizes: &[(usize, usize)],
    background_sizes: &[(usize, usize)],
) -> Result<TilingResult> {
    let grid = Grid::from_rows(rows)?;
    let foreground = TileCatalog::from_dimensions(foreground_sizes)?;
    let background = TileCatalog::from_dimensions(background_sizes)?;
    Ok(tile(&grid, &foreground, &background))
}
