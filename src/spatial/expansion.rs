//! Integer upsampling of source matrices and baseplate fit calculations
//!
//! Each source cell becomes a `scale` x `scale` block in the expanded grid,
//! so output cell `(x, y)` always reads source cell `(x / scale, y / scale)`.

use ndarray::Array2;
use serde::Serialize;

use crate::io::error::{LayoutError, Result};
use crate::spatial::grid::Grid;

/// Outcome of checking an upsampled grid against a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitCheck {
    /// Whether both required dimensions fit inside the container
    pub fits: bool,
    /// Columns needed after upsampling
    pub required_width: usize,
    /// Rows needed after upsampling
    pub required_height: usize,
}

/// Upsample `source` so every cell becomes a `scale` x `scale` block
///
/// A scale of 1 returns an identical copy.
///
/// # Errors
///
/// Returns `InvalidScale` when `scale` is 0, or when the expanded
/// dimensions would overflow `usize`
pub fn expand(source: &Grid, scale: usize) -> Result<Grid> {
    if scale < 1 {
        return Err(LayoutError::InvalidScale { scale });
    }

    let (Some(width), Some(height)) = (
        source.width().checked_mul(scale),
        source.height().checked_mul(scale),
    ) else {
        return Err(LayoutError::InvalidScale { scale });
    };

    let cells = Array2::from_shape_fn((height, width), |(y, x)| {
        source.get(x / scale, y / scale).unwrap_or(false)
    });

    Ok(Grid::from_array(cells))
}

/// Largest scale at which a `source_size` square still fits the container
///
/// Never returns less than 1. A zero container dimension, or a zero source
/// size, means the container places no constraint and yields 1.
pub fn max_scale_factor(source_size: usize, container_width: usize, container_height: usize) -> usize {
    if container_width == 0 || container_height == 0 || source_size == 0 {
        return 1;
    }

    let by_width = container_width / source_size;
    let by_height = container_height / source_size;

    by_width.min(by_height).max(1)
}

/// Check whether a source upsampled by `scale` fits inside the container
pub const fn validate_fit(
    source_width: usize,
    source_height: usize,
    scale: usize,
    container_width: usize,
    container_height: usize,
) -> FitCheck {
    let required_width = source_width.saturating_mul(scale);
    let required_height = source_height.saturating_mul(scale);

    FitCheck {
        fits: required_width <= container_width && required_height <= container_height,
        required_width,
        required_height,
    }
}
