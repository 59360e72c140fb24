//! Error types for layout optimization and file processing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// Upsampling was requested with a scale below 1
    InvalidScale {
        /// Scale factor that was requested
        scale: usize,
    },

    /// Grid rows do not all share one length
    MalformedGrid {
        /// Index of the first row with the wrong length
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A tile size has a zero dimension
    InvalidTileSize {
        /// Supplied width
        width: usize,
        /// Supplied height
        height: usize,
    },

    /// A cooperative row check stopped the scan
    Cancelled {
        /// Row that was about to be scanned
        row: usize,
    },

    /// Command-line or configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load a source bitmap
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered layout
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode a layout report
    Serialization {
        /// Path the report was destined for
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "Invalid scale factor {scale}: must be at least 1")
            }
            Self::MalformedGrid {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Malformed grid: row {row} has {found} cells, expected {expected}"
                )
            }
            Self::InvalidTileSize { width, height } => {
                write!(
                    f,
                    "Invalid tile size {width}x{height}: dimensions must be at least 1"
                )
            }
            Self::Cancelled { row } => {
                write!(f, "Tiling cancelled before row {row}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to encode report for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<image::ImageError> for LayoutError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable target path
pub fn io_error(msg: &str) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
