//! Bitmap input thresholding and PNG export of finished layouts

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::analysis::statistics::TilingResult;
use crate::io::configuration::{BACKGROUND_COLOR, FOREGROUND_COLOR, OUTLINE_COLOR};
use crate::io::error::{LayoutError, Result};
use crate::spatial::Grid;

/// Perceived brightness of a pixel composited over white
///
/// Uses the Rec. 601 integer weights.
pub fn luminance(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, a] = pixel.0;
    let alpha = u32::from(a);
    let over_white = |channel: u8| (u32::from(channel) * alpha + 255 * (255 - alpha)) / 255;

    let weighted = 299 * over_white(r) + 587 * over_white(g) + 114 * over_white(b);
    (weighted / 1000).min(255) as u8
}

/// Threshold an RGBA image into a grid, one pixel per cell
///
/// Pixels darker than `threshold` become foreground.
pub fn grid_from_image(image: &RgbaImage, threshold: u8) -> Grid {
    let (width, height) = image.dimensions();
    let cells = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        image
            .get_pixel_checked(x as u32, y as u32)
            .is_some_and(|&pixel| luminance(pixel) < threshold)
    });
    Grid::from_array(cells)
}

/// Load a PNG bitmap and threshold it into a grid
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_grid_from_png<P: AsRef<Path>>(path: P, threshold: u8) -> Result<Grid> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| LayoutError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(grid_from_image(&img.to_rgba8(), threshold))
}

/// Draw a layout with every cell as a `cell_pixels` square
///
/// Each tile is filled with its color and outlined, so tile boundaries
/// remain visible between neighbors of the same color. Outlines are skipped
/// when cells are smaller than 3 pixels.
pub fn render_layout(
    result: &TilingResult,
    grid_width: usize,
    grid_height: usize,
    cell_pixels: u32,
) -> RgbaImage {
    let cell = cell_pixels.max(1);
    let mut img: RgbaImage = ImageBuffer::from_pixel(
        grid_width as u32 * cell,
        grid_height as u32 * cell,
        Rgba(BACKGROUND_COLOR),
    );

    for placement in &result.placements {
        let fill = if placement.is_foreground {
            Rgba(FOREGROUND_COLOR)
        } else {
            Rgba(BACKGROUND_COLOR)
        };

        let left = placement.x as u32 * cell;
        let top = placement.y as u32 * cell;
        let right = left + placement.width as u32 * cell;
        let bottom = top + placement.height as u32 * cell;

        for py in top..bottom {
            for px in left..right {
                let on_edge = px == left || py == top || px + 1 == right || py + 1 == bottom;
                let color = if on_edge && cell >= 3 {
                    Rgba(OUTLINE_COLOR)
                } else {
                    fill
                };
                if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }

    img
}

/// Render a layout and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    result: &TilingResult,
    grid_width: usize,
    grid_height: usize,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_layout(result, grid_width, grid_height, cell_pixels);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| LayoutError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
