/// Per-run coverage tracking over the grid
pub mod coverage;
/// Greedy tiling engine and its entry points
pub mod executor;
/// Placed tiles and placeability checks
pub mod placement;

pub use executor::{TilingEngine, optimize_rows, tile, tile_with_row_check};
pub use placement::Placement;
