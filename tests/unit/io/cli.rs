//! Tests for argument parsing, configuration resolution and file processing

#[cfg(test)]
mod tests {
    use brickplan::LayoutError;
    use brickplan::io::cli::{Cli, FileProcessor, parse_dimensions, resolve_baseplate};
    use brickplan::io::configuration::{ALL_TILE_SIZES, DEFAULT_TILE_SIZES};
    use brickplan::spatial::{Grid, TileCatalog};
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tracing::Level;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("brickplan").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn write_solid_png(path: &Path, size: u32) {
        RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 255]))
            .save(path)
            .expect("save source");
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("48x48").ok(), Some((48, 48)));
        assert_eq!(parse_dimensions(" 2X8 ").ok(), Some((2, 8)));
        assert_eq!(parse_dimensions("4×1").ok(), Some((4, 1)));
        assert!(parse_dimensions("48").is_err());
        assert!(parse_dimensions("ax2").is_err());
        assert!(parse_dimensions("2x-1").is_err());
    }

    #[test]
    fn test_resolve_baseplate() {
        assert_eq!(resolve_baseplate("large").ok(), Some((48, 48)));
        assert_eq!(resolve_baseplate("Small").ok(), Some((16, 16)));
        assert_eq!(resolve_baseplate("32x16").ok(), Some((32, 16)));
        assert!(resolve_baseplate("huge").is_err());

        let config = parse(&["in.png", "-b", "medium"])
            .layout_config()
            .expect("valid config");
        assert_eq!(config.baseplate, (32, 32));
        assert_eq!(config.scale_for(10, 10), 3);
    }

    #[test]
    fn test_default_configuration() {
        let config = parse(&["in.png"]).layout_config().expect("valid config");
        let defaults = TileCatalog::from_dimensions(&DEFAULT_TILE_SIZES).expect("valid sizes");

        assert_eq!(config.baseplate, (48, 48));
        assert_eq!(config.scale, None);
        assert_eq!(config.foreground, defaults);
        assert_eq!(config.background, defaults);
        assert!(!config.render);
    }

    #[test]
    fn test_explicit_sizes_and_presets() {
        let config = parse(&["in.png", "-f", "2x2,1x3", "-g", "4x1"])
            .layout_config()
            .expect("valid config");
        assert_eq!(config.foreground.len(), 3);
        assert_eq!(config.background.len(), 2);

        let all = parse(&["in.png", "--all-sizes"])
            .layout_config()
            .expect("valid config");
        assert_eq!(all.foreground.len(), ALL_TILE_SIZES.len());

        let unit = parse(&["in.png", "--unit-only", "-f", "2x2"])
            .layout_config()
            .expect("valid config");
        assert_eq!(unit.foreground, TileCatalog::unit());
        assert_eq!(unit.background, TileCatalog::unit());
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            parse(&["in.png", "--scale", "0"]).layout_config(),
            Err(LayoutError::InvalidScale { scale: 0 })
        ));
        assert!(matches!(
            parse(&["in.png", "-f", "0x2"]).layout_config(),
            Err(LayoutError::InvalidTileSize { .. })
        ));
        assert!(parse(&["in.png", "--cell-pixels", "0"]).layout_config().is_err());
        assert!(parse(&["in.png", "--baseplate", "big"]).layout_config().is_err());
        assert!(Cli::try_parse_from(["brickplan", "in.png", "--all-sizes", "--unit-only"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse(&["in.png"]).log_level(), Level::WARN);
        assert_eq!(parse(&["in.png", "-v"]).log_level(), Level::INFO);
        assert_eq!(parse(&["in.png", "-vv"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["in.png", "-vvvv"]).log_level(), Level::TRACE);
    }

    // Without an explicit scale the largest fitting scale is used
    #[test]
    fn test_scale_selection() {
        let derived = parse(&["in.png"]).layout_config().expect("valid config");
        assert_eq!(derived.scale_for(21, 21), 2);
        assert_eq!(derived.scale_for(25, 25), 1);

        let explicit = parse(&["in.png", "-s", "3"])
            .layout_config()
            .expect("valid config");
        assert_eq!(explicit.scale_for(21, 21), 3);

        let source = Grid::filled(4, 4, true);
        let (grid, scale) = derived.prepare_grid(&source).expect("fits limits");
        assert_eq!(scale, 12);
        assert_eq!((grid.width(), grid.height()), (48, 48));
    }

    #[test]
    fn test_prepare_grid_rejects_oversized_scale() {
        let config = parse(&["in.png", "-s", "5000"])
            .layout_config()
            .expect("valid config");
        assert!(config.prepare_grid(&Grid::filled(4, 4, true)).is_err());
    }

    #[test]
    fn test_process_writes_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("code.png");
        write_solid_png(&input, 4);

        let target = input.to_string_lossy().to_string();
        let cli = parse(&[target.as_str(), "--scale", "1", "--quiet", "--render"]);
        let mut processor = FileProcessor::new(cli).expect("valid config");
        processor.process().expect("process file");

        let report_path = FileProcessor::report_path(&input);
        let text = std::fs::read_to_string(&report_path).expect("report written");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        // 2x4 tiles cover the 4x4 foreground in two placements
        assert_eq!(value["total"], 2);
        assert_eq!(value["savings_percent"], 88);
        assert_eq!(value["placements"][0]["width"], 2);
        assert_eq!(value["placements"][0]["height"], 4);
        assert!(FileProcessor::render_path(&input).exists());
    }

    #[test]
    fn test_process_directory_skips_existing_reports() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.png");
        write_solid_png(&first, 2);
        write_solid_png(&second, 2);
        std::fs::write(FileProcessor::report_path(&first), "{}").expect("seed report");

        let target = dir.path().to_string_lossy().to_string();
        let mut processor =
            FileProcessor::new(parse(&[target.as_str(), "-s", "1", "-q", "-r"])).expect("valid config");
        processor.process().expect("process directory");

        let untouched = std::fs::read_to_string(FileProcessor::report_path(&first)).expect("read");
        assert_eq!(untouched, "{}");
        assert!(FileProcessor::report_path(&second).exists());

        // Rendered layouts are not picked up as new inputs
        let mut rerun =
            FileProcessor::new(parse(&[target.as_str(), "-s", "1", "-q", "-n"])).expect("valid config");
        rerun.process().expect("reprocess directory");
        assert!(!FileProcessor::report_path(&FileProcessor::render_path(&second)).exists());
    }

    #[test]
    fn test_process_rejects_non_png_target() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, "not an image").expect("write file");

        let target = input.to_string_lossy().to_string();
        let mut processor =
            FileProcessor::new(parse(&[target.as_str(), "-q"])).expect("valid config");
        assert!(processor.process().is_err());
    }

    #[test]
    fn test_output_paths() {
        let input = Path::new("scans/code.png");
        assert_eq!(
            FileProcessor::report_path(input),
            Path::new("scans/code_layout.json")
        );
        assert_eq!(
            FileProcessor::render_path(input),
            Path::new("scans/code_layout.png")
        );
    }
}
