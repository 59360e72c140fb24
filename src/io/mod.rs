//! Input/output, configuration and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Layout constants, presets and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Bitmap input and rendered layout output
pub mod image;
/// Progress display for batch runs
pub mod progress;
/// Serializable reports and bills of materials
pub mod report;
