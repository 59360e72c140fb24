//! Placed tiles and the placeability test used by the greedy scan

use serde::Serialize;

use crate::algorithm::coverage::CoverageState;
use crate::spatial::Grid;

/// One tile committed to the layout
///
/// `width` and `height` are the oriented dimensions actually used, which may
/// be the transpose of the catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    /// Column of the top-left cell
    pub x: usize,
    /// Row of the top-left cell
    pub y: usize,
    /// Columns spanned
    pub width: usize,
    /// Rows spanned
    pub height: usize,
    /// Color of every covered cell
    pub is_foreground: bool,
}

impl Placement {
    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Orientation-free `(long, short)` size, used as the grouping key
    pub const fn normalized(&self) -> (usize, usize) {
        if self.width >= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        }
    }

    /// Whether the tile covers column `x`, row `y`
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Whether the two rectangles share at least one cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Whether a `width` x `height` tile can go at `(x, y)`
///
/// The rectangle must lie inside the grid, match `color` in every cell, and
/// avoid every covered cell.
pub fn can_place(
    grid: &Grid,
    coverage: &CoverageState,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    color: bool,
) -> bool {
    grid.is_uniform(x, y, width, height, color) && !coverage.any_covered(x, y, width, height)
}
