//! Greedy brick layout optimization for two-color grids
//!
//! A source matrix (typically a scanned code or thresholded bitmap) is
//! upsampled onto a baseplate, then covered cell by cell with the largest
//! catalog tile that fits a single color region. The result lists every
//! placement along with grouped per-size counts and the tile savings versus
//! a one-tile-per-cell layout.

#![forbid(unsafe_code)]

/// Greedy tiling engine, coverage tracking and placements
pub mod algorithm;
/// Aggregate counts and savings for finished layouts
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid storage, upsampling and tile catalogs
pub mod spatial;

pub use algorithm::{Placement, TilingEngine, optimize_rows, tile, tile_with_row_check};
pub use analysis::{SizeCount, TilingResult};
pub use io::error::{LayoutError, Result};
pub use spatial::{Grid, TileCatalog, TileSize};
