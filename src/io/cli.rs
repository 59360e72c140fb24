//! Command-line interface for batch layout optimization of PNG bitmaps

use crate::algorithm::executor::tile_with_row_check;
use crate::io::configuration::{
    ALL_TILE_SIZES, BASEPLATE_PRESETS, DEFAULT_BASEPLATE_SIZE, DEFAULT_CELL_PIXELS,
    DEFAULT_LUMINANCE_THRESHOLD, DEFAULT_TILE_SIZES, MAX_CELL_PIXELS, MAX_GRID_DIMENSION,
    OUTPUT_SUFFIX, RENDER_EXTENSION, REPORT_EXTENSION,
};
use crate::io::error::{LayoutError, Result, invalid_parameter, io_error};
use crate::io::image::{export_layout_as_png, load_grid_from_png};
use crate::io::progress::ProgressManager;
use crate::io::report::LayoutReport;
use crate::spatial::expansion::{expand, max_scale_factor, validate_fit};
use crate::spatial::{Grid, TileCatalog};
use clap::{ArgAction, Parser};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "brickplan")]
#[command(
    author,
    version,
    about = "Cover two-color bitmaps with the fewest rectangular bricks"
)]
/// Command-line arguments for the layout tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Upsampling factor; defaults to the largest that fits the baseplate
    #[arg(short, long)]
    pub scale: Option<usize>,

    /// Baseplate as WxH or a preset name (small, medium, large); defaults to 48x48
    #[arg(short, long)]
    pub baseplate: Option<String>,

    /// Foreground tile sizes as WxH, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub foreground_sizes: Vec<String>,

    /// Background tile sizes as WxH, comma separated
    #[arg(short = 'g', long, value_delimiter = ',')]
    pub background_sizes: Vec<String>,

    /// Offer every standard size for both colors
    #[arg(short, long, conflicts_with = "unit_only")]
    pub all_sizes: bool,

    /// Use only 1x1 tiles
    #[arg(short, long)]
    pub unit_only: bool,

    /// Pixels darker than this luminance are foreground
    #[arg(short, long, default_value_t = DEFAULT_LUMINANCE_THRESHOLD)]
    pub threshold: u8,

    /// Also write a rendered layout PNG
    #[arg(short, long)]
    pub render: bool,

    /// Pixel size of one rendered cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Write the bill of materials to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity count
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Resolve arguments into a validated layout configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension string is malformed, a tile size has
    /// a zero dimension, the scale is 0, or the cell size is out of range
    pub fn layout_config(&self) -> Result<LayoutConfig> {
        if let Some(scale) = self.scale
            && scale < 1
        {
            return Err(LayoutError::InvalidScale { scale });
        }

        if self.cell_pixels == 0 || self.cell_pixels > MAX_CELL_PIXELS {
            return Err(invalid_parameter(
                "cell-pixels",
                &self.cell_pixels,
                &format!("must be between 1 and {MAX_CELL_PIXELS}"),
            ));
        }

        let baseplate = self
            .baseplate
            .as_deref()
            .map_or(Ok((DEFAULT_BASEPLATE_SIZE, DEFAULT_BASEPLATE_SIZE)), resolve_baseplate)?;
        let foreground = self.catalog_for(&self.foreground_sizes)?;
        let background = self.catalog_for(&self.background_sizes)?;

        Ok(LayoutConfig {
            scale: self.scale,
            baseplate,
            foreground,
            background,
            threshold: self.threshold,
            render: self.render,
            cell_pixels: self.cell_pixels,
            print: self.print,
        })
    }

    fn catalog_for(&self, requested: &[String]) -> Result<TileCatalog> {
        if self.unit_only {
            return Ok(TileCatalog::unit());
        }
        if self.all_sizes {
            return TileCatalog::from_dimensions(&ALL_TILE_SIZES);
        }
        if requested.is_empty() {
            return TileCatalog::from_dimensions(&DEFAULT_TILE_SIZES);
        }

        let dimensions = requested
            .iter()
            .map(|s| parse_dimensions(s))
            .collect::<Result<Vec<_>>>()?;
        TileCatalog::from_dimensions(&dimensions)
    }
}

/// Resolve a baseplate preset name or `WxH` string
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is neither a preset nor `WxH`
pub fn resolve_baseplate(value: &str) -> Result<(usize, usize)> {
    BASEPLATE_PRESETS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(value.trim()))
        .map_or_else(|| parse_dimensions(value), |&(_, w, h)| Ok((w, h)))
}

/// Parse a `WxH` dimension string
///
/// Zero dimensions are accepted here and rejected by the consumer.
///
/// # Errors
///
/// Returns `InvalidParameter` if the string is not two integers around `x`
pub fn parse_dimensions(s: &str) -> Result<(usize, usize)> {
    let (width, height) = s
        .trim()
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| invalid_parameter("dimensions", &s, &"expected WxH"))?;

    let width = width
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid_parameter("dimensions", &s, &e))?;
    let height = height
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid_parameter("dimensions", &s, &e))?;

    Ok((width, height))
}

/// Validated settings shared by every processed file
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Explicit upsampling factor, if any
    pub scale: Option<usize>,
    /// Container used to derive the scale, as (width, height)
    pub baseplate: (usize, usize),
    /// Catalog for foreground cells
    pub foreground: TileCatalog,
    /// Catalog for background cells
    pub background: TileCatalog,
    /// Luminance threshold for bitmap input
    pub threshold: u8,
    /// Whether to write a rendered PNG
    pub render: bool,
    /// Pixel size of one rendered cell
    pub cell_pixels: u32,
    /// Whether to print the bill of materials
    pub print: bool,
}

impl LayoutConfig {
    /// Scale to apply to a `source_width` x `source_height` source
    pub fn scale_for(&self, source_width: usize, source_height: usize) -> usize {
        self.scale.unwrap_or_else(|| {
            let (plate_width, plate_height) = self.baseplate;
            max_scale_factor(source_width.max(source_height), plate_width, plate_height)
        })
    }

    /// Upsample a source grid for tiling
    ///
    /// # Errors
    ///
    /// Returns an error if the scaled grid would exceed the size limit
    pub fn prepare_grid(&self, source: &Grid) -> Result<(Grid, usize)> {
        let scale = self.scale_for(source.width(), source.height());
        let (plate_width, plate_height) = self.baseplate;
        let fit = validate_fit(source.width(), source.height(), scale, plate_width, plate_height);

        if fit.required_width > MAX_GRID_DIMENSION || fit.required_height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &format!(
                    "grid of {}x{} exceeds the {MAX_GRID_DIMENSION} cell limit",
                    fit.required_width, fit.required_height
                ),
            ));
        }
        if !fit.fits {
            tracing::warn!(
                required_width = fit.required_width,
                required_height = fit.required_height,
                plate_width,
                plate_height,
                "layout does not fit the baseplate"
            );
        }

        Ok((expand(source, scale)?, scale))
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    config: LayoutConfig,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments do not form a valid configuration
    pub fn new(cli: Cli) -> Result<Self> {
        let config = cli.layout_config()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            config,
            progress_manager,
        })
    }

    /// Validated configuration in use
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_png(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let report_path = Self::report_path(input_path);
        if report_path.exists() {
            tracing::warn!(path = %input_path.display(), "skipping, report exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        let source = load_grid_from_png(input_path, self.config.threshold)?;
        let (grid, scale) = self.config.prepare_grid(&source)?;

        if let Some(pm) = &self.progress_manager {
            pm.start_file(index, input_path, grid.height());
        }

        let progress = self.progress_manager.as_ref();
        let result = tile_with_row_check(
            &grid,
            &self.config.foreground,
            &self.config.background,
            |row| {
                if let Some(pm) = progress {
                    pm.update_row(index, row);
                }
                ControlFlow::Continue(())
            },
        )?;

        tracing::info!(
            path = %input_path.display(),
            scale,
            tiles = result.total,
            savings = result.savings_percent,
            elapsed_ms = start_time.elapsed().as_millis(),
            "layout optimized"
        );

        if self.config.render {
            export_layout_as_png(
                &result,
                grid.width(),
                grid.height(),
                self.config.cell_pixels,
                &Self::render_path(input_path),
            )?;
        }

        let report = LayoutReport::new(
            source.width(),
            source.height(),
            scale,
            grid.width(),
            grid.height(),
            result,
        );
        report.write_json(&Self::report_path(input_path))?;

        if self.config.print {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}:", input_path.display())
                .and_then(|()| write!(stdout, "{}", report.bill_of_materials()))
                .map_err(|e| LayoutError::FileSystem {
                    path: PathBuf::from("<stdout>"),
                    operation: "write bill of materials",
                    source: e,
                })?;
        }

        if let Some(pm) = &self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    /// Report path written for `input_path`
    pub fn report_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, REPORT_EXTENSION)
    }

    /// Rendered layout path written for `input_path`
    pub fn render_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, RENDER_EXTENSION)
    }

    fn sibling_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Rendered layouts sit beside their sources and must not be re-read as input
fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
