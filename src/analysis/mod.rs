//! Post-processing of finished layouts

/// Grouped tile counts and savings accounting
pub mod statistics;

pub use statistics::{SizeCount, TilingResult};
