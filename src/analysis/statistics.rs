//! Aggregate counts and savings for a finished layout
//!
//! Placements are grouped per color by their orientation-free size, so a
//! `1x4` and a `4x1` tile land in the same `4x1` bucket.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithm::placement::Placement;
use crate::spatial::grid::CellCount;

/// Number of tiles of one normalized size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeCount {
    /// Long side of the tile
    pub width: usize,
    /// Short side of the tile
    pub height: usize,
    /// Tiles of this size placed
    pub count: usize,
}

impl SizeCount {
    /// Cells covered by a single tile of this size
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Complete output of one tiling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TilingResult {
    /// Placements in commit order
    pub placements: Vec<Placement>,
    /// Foreground tiles grouped by size, largest first
    pub foreground: Vec<SizeCount>,
    /// Background tiles grouped by size, largest first
    pub background: Vec<SizeCount>,
    /// Foreground tiles placed
    pub foreground_total: usize,
    /// Background tiles placed
    pub background_total: usize,
    /// All tiles placed
    pub total: usize,
    /// Tile count of the all-1x1 layout
    pub cell_count: CellCount,
    /// Tile reduction versus the all-1x1 layout, in whole percent
    pub savings_percent: i64,
}

impl TilingResult {
    /// Derive all aggregates from the placement list
    pub fn from_placements(placements: Vec<Placement>, cell_count: CellCount) -> Self {
        let foreground = group_by_size(placements.iter().filter(|p| p.is_foreground));
        let background = group_by_size(placements.iter().filter(|p| !p.is_foreground));

        let foreground_total = foreground.iter().map(|c| c.count).sum();
        let background_total = background.iter().map(|c| c.count).sum();
        let total = foreground_total + background_total;

        Self {
            savings_percent: savings_percent(cell_count.total, total),
            placements,
            foreground,
            background,
            foreground_total,
            background_total,
            total,
            cell_count,
        }
    }

    /// Placements of one color, in commit order
    pub fn placements_of(&self, is_foreground: bool) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.is_foreground == is_foreground)
    }
}

/// Count placements per normalized size, sorted by area then long side, both descending
pub fn group_by_size<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Vec<SizeCount> {
    let mut counts: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for placement in placements {
        *counts.entry(placement.normalized()).or_insert(0) += 1;
    }

    let mut grouped: Vec<SizeCount> = counts
        .into_iter()
        .map(|((width, height), count)| SizeCount {
            width,
            height,
            count,
        })
        .collect();

    grouped.sort_by_key(|c| (Reverse(c.area()), Reverse(c.width)));
    grouped
}

/// Percentage of tiles saved relative to one tile per cell
///
/// Rounds half away from zero. An empty grid saves nothing.
pub fn savings_percent(cell_total: usize, tile_total: usize) -> i64 {
    if cell_total == 0 {
        return 0;
    }

    let saved = cell_total as f64 - tile_total as f64;
    ((saved / cell_total as f64) * 100.0).round() as i64
}
