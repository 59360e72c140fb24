//! Layout constants, tile presets and runtime configuration defaults

// Baseplate dimensions in cells
/// Side length of the default square baseplate
pub const DEFAULT_BASEPLATE_SIZE: usize = 48;

/// Named square baseplates offered as containers
pub const BASEPLATE_PRESETS: [(&str, usize, usize); 3] =
    [("small", 16, 16), ("medium", 32, 32), ("large", 48, 48)];

// Tile presets, larger dimension second as listed in brick catalogs
/// Every standard plate size available for selection
pub const ALL_TILE_SIZES: [(usize, usize); 29] = [
    (8, 16),
    (6, 12),
    (6, 10),
    (6, 8),
    (6, 6),
    (4, 12),
    (4, 10),
    (4, 8),
    (4, 6),
    (4, 4),
    (3, 3),
    (2, 16),
    (2, 14),
    (2, 12),
    (2, 10),
    (2, 8),
    (2, 6),
    (2, 4),
    (2, 3),
    (2, 2),
    (1, 12),
    (1, 10),
    (1, 8),
    (1, 6),
    (1, 5),
    (1, 4),
    (1, 3),
    (1, 2),
    (1, 1),
];

/// Starting selection when the user picks nothing
pub const DEFAULT_TILE_SIZES: [(usize, usize); 8] = [
    (2, 8),
    (2, 6),
    (2, 4),
    (2, 3),
    (2, 2),
    (1, 4),
    (1, 3),
    (1, 2),
];

// Bitmap input
/// Pixels with luminance below this are foreground
pub const DEFAULT_LUMINANCE_THRESHOLD: u8 = 128;

// Layout rendering
/// Side length in pixels of one rendered cell
pub const DEFAULT_CELL_PIXELS: u32 = 8;
/// Upper bound on rendered cell size
pub const MAX_CELL_PIXELS: u32 = 64;
/// Fill for foreground cells
pub const FOREGROUND_COLOR: [u8; 4] = [24, 24, 24, 255];
/// Fill for background cells
pub const BACKGROUND_COLOR: [u8; 4] = [240, 240, 240, 255];
/// Tile outline color
pub const OUTLINE_COLOR: [u8; 4] = [200, 40, 40, 255];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension after upsampling
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_layout";
/// Extension of the JSON report
pub const REPORT_EXTENSION: &str = "json";
/// Extension of the rendered layout
pub const RENDER_EXTENSION: &str = "png";
