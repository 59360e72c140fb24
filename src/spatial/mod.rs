//! Spatial data structures for layout optimization
//!
//! This module contains:
//! - The immutable two-color grid
//! - Integer upsampling and baseplate fit checks
//! - Tile sizes and the ordered tile catalog

/// Integer upsampling of source matrices
pub mod expansion;
/// Two-color grid storage and cell tallies
pub mod grid;
/// Tile sizes and catalog normalization
pub mod tiles;

pub use grid::Grid;
pub use tiles::{TileCatalog, TileSize};
