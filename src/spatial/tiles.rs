//! Tile sizes and the ordered catalog the engine walks
//!
//! A tile size is an unordered pair: `2x4` and `4x2` name the same tile, and
//! the engine decides orientation at placement time. The catalog deduplicates
//! user selections, guarantees the 1x1 fallback, and fixes a deterministic
//! largest-first order so identical inputs always produce identical layouts.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::io::error::{LayoutError, Result};

/// Footprint of a tile before orientation is chosen
///
/// Equality and hashing ignore orientation. The raw `width` and `height` are
/// kept as supplied since they decide which orientation is tried first.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TileSize {
    width: usize,
    height: usize,
}

impl TileSize {
    /// The 1x1 unit tile, always placeable on an uncovered cell
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    /// Create a tile size with both dimensions at least 1
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` if either dimension is zero
    pub const fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidTileSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width as supplied
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height as supplied
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Larger of the two dimensions
    pub const fn long_side(&self) -> usize {
        if self.width >= self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Smaller of the two dimensions
    pub const fn short_side(&self) -> usize {
        if self.width >= self.height {
            self.height
        } else {
            self.width
        }
    }

    /// Whether both orientations are the same rectangle
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Canonical `(long, short)` form shared by both orientations
    pub const fn normalized(&self) -> (usize, usize) {
        (self.long_side(), self.short_side())
    }

    /// Orientations to try, as-supplied first, transpose second
    ///
    /// Squares yield a single orientation.
    pub fn orientations(&self) -> impl Iterator<Item = (usize, usize)> {
        let transposed = (!self.is_square()).then_some((self.height, self.width));
        std::iter::once((self.width, self.height)).chain(transposed)
    }
}

impl PartialEq for TileSize {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for TileSize {}

impl Hash for TileSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Deduplicated tile sizes in placement priority order
///
/// Sorted by descending area, then descending long side, then descending raw
/// width. The 1x1 tile is always present and always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TileCatalog {
    sizes: Vec<TileSize>,
}

impl TileCatalog {
    /// Normalize a user selection into a catalog
    ///
    /// Sizes are ordered first and deduplicated second, so when both
    /// orientations of a size are supplied the wider one is kept whatever the
    /// input order. The input slice is left untouched.
    pub fn build(user_sizes: &[TileSize]) -> Self {
        let mut ordered = user_sizes.to_vec();
        ordered.push(TileSize::UNIT);

        // Stable, so exact repeats keep their input order
        ordered.sort_by_key(|size| {
            (
                Reverse(size.area()),
                Reverse(size.long_side()),
                Reverse(size.width()),
            )
        });

        let mut seen = HashSet::with_capacity(ordered.len());
        let sizes = ordered
            .into_iter()
            .filter(|size| seen.insert(*size))
            .collect();

        Self { sizes }
    }

    /// Validate raw `(width, height)` pairs and normalize them
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` for the first pair with a zero dimension
    pub fn from_dimensions(dimensions: &[(usize, usize)]) -> Result<Self> {
        let sizes = dimensions
            .iter()
            .map(|&(width, height)| TileSize::new(width, height))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(&sizes))
    }

    /// Catalog holding only the 1x1 tile
    pub fn unit() -> Self {
        Self {
            sizes: vec![TileSize::UNIT],
        }
    }

    /// Sizes in priority order
    pub fn as_slice(&self) -> &[TileSize] {
        &self.sizes
    }

    /// Iterate sizes in priority order
    pub fn iter(&self) -> std::slice::Iter<'_, TileSize> {
        self.sizes.iter()
    }

    /// Number of distinct sizes, including 1x1
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the catalog holds no sizes
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Whether the catalog holds `size` in either orientation
    pub fn contains(&self, size: &TileSize) -> bool {
        self.sizes.contains(size)
    }
}

impl<'a> IntoIterator for &'a TileCatalog {
    type Item = &'a TileSize;
    type IntoIter = std::slice::Iter<'a, TileSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TileCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.sizes.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
