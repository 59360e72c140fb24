//! Per-run record of which cells a placed tile already owns

use bitvec::prelude::*;

/// Tracks which grid cells already belong to a placed tile
///
/// Stored as one flat bit per cell, indexed `y * width + x`. Each engine run
/// owns its own instance and drops it when the run returns.
#[derive(Clone, Debug)]
pub struct CoverageState {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CoverageState {
    /// Create coverage for a `width` x `height` grid with nothing covered
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Columns tracked
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Rows tracked
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Test whether a cell is covered
    ///
    /// Out-of-range cells report as covered so they are never placeable.
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(true)
    }

    /// Whether any cell of the rectangle is covered or out of range
    pub fn any_covered(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        (y..y.saturating_add(height)).any(|row| {
            if x.saturating_add(width) > self.width {
                return true;
            }
            let Some(start) = self.index(x, row) else {
                return true;
            };
            self.bits
                .get(start..start + width)
                .is_none_or(|span| span.any())
        })
    }

    /// Mark every cell of the rectangle covered, clipped to the grid
    pub fn cover(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let x_end = x.saturating_add(width).min(self.width);
        if x >= x_end {
            return;
        }
        for row in y..y.saturating_add(height).min(self.height) {
            let Some(start) = self.index(x, row) else {
                continue;
            };
            if let Some(span) = self.bits.get_mut(start..start + (x_end - x)) {
                span.fill(true);
            }
        }
    }

    /// Number of covered cells
    pub fn covered_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether every cell is covered
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }
}
