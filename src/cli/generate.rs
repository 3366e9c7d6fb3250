//! Generate command implementation.
//!
//! Renders an image file and prints the art to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::convert::{Converter, RenderOptions};
use crate::error::Result;
use crate::font::GlyphRasterizer;
use crate::output::{display_path, plural, Printer};
use crate::render::ArtRenderer;
use crate::types::Palette;

use super::palette::warn_fallbacks;
use super::PaletteSource;

/// Render an image file as ASCII art
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image file to read
    #[arg(required = true)]
    pub image: PathBuf,

    /// Width of output text (default: width of image)
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Contrast ratio (1.0 is the original image, > 1.0 is high contrast)
    #[arg(long, short, value_name = "RATIO")]
    pub contrast: Option<f32>,

    /// Brightness ratio (1.0 is the original image, > 1.0 is brighter)
    #[arg(long, short, value_name = "RATIO")]
    pub brightness: Option<f32>,

    #[command(flatten)]
    pub source: PaletteSource,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let (converter, options) = prepare(&args, printer)?;

    let art = converter.render_path(&args.image, &options)?;

    let rows = art.lines().count();
    let columns = art.lines().next().map_or(0, |row| row.chars().count());
    printer.status(
        "Rendered",
        &format!(
            "{} x {} from {}",
            plural(columns, "column", "columns"),
            plural(rows, "row", "rows"),
            display_path(&args.image)
        ),
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(art.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Build the converter and render options, command-line flags over config.
fn prepare(args: &GenerateArgs, printer: &Printer) -> Result<(Converter, RenderOptions)> {
    let config = args.source.load_config(printer)?;
    let charset = args.source.charset(&config)?;
    let font = args.source.font(&config).rasterizer();

    let ranked = Palette::rank(&charset, &font);
    warn_fallbacks(&ranked, printer);

    let renderer = ArtRenderer::new(Palette::from_ranked(&ranked)?, font.cell_size());

    let defaults = config.render_options();
    let options = RenderOptions {
        width: args.width.or(defaults.width),
        brightness: args.brightness.or(defaults.brightness),
        contrast: args.contrast.or(defaults.contrast),
    };

    Ok((Converter::new(renderer), options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::config::CONFIG_FILENAME;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    fn setup(dir: &Path) -> (String, String) {
        let config = dir.join(CONFIG_FILENAME);
        std::fs::write(
            &config,
            "width: 12\ncontrast: 1.5\ncharset: \"#.\"\nfont: square\n",
        )
        .unwrap();

        let image = dir.join("white.png");
        RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]))
            .save(&image)
            .unwrap();

        (
            config.to_string_lossy().into_owned(),
            image.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn test_generate_uses_config_without_flags() {
        let dir = tempdir().unwrap();
        let (config, image) = setup(dir.path());
        let args = parse(&["asciigen", "generate", &image, "--config", &config]);

        let (converter, options) = prepare(&args, &Printer::new()).unwrap();

        assert_eq!(options.width, Some(12));
        assert_eq!(options.contrast, Some(1.5));
        assert_eq!(options.brightness, None);
        assert_eq!(converter.renderer().palette().chars(), &['#', '.']);
        assert_eq!(converter.renderer().cell_size(), (8, 8));

        let art = converter.render_path(Path::new(&image), &options).unwrap();
        assert_eq!(art, "............\n".repeat(12));
    }

    #[test]
    fn test_generate_flags_override_config() {
        let dir = tempdir().unwrap();
        let (config, image) = setup(dir.path());
        let args = parse(&[
            "asciigen",
            "generate",
            &image,
            "--config",
            &config,
            "-w",
            "8",
            "-b",
            "1.2",
            "--charset",
            "@ ",
            "--font",
            "tall",
        ]);

        let (converter, options) = prepare(&args, &Printer::new()).unwrap();

        assert_eq!(options.width, Some(8));
        assert_eq!(options.contrast, Some(1.5));
        assert_eq!(options.brightness, Some(1.2));
        assert_eq!(converter.renderer().palette().chars(), &['@', ' ']);
        assert_eq!(converter.renderer().cell_size(), (8, 16));

        let art = converter.render_path(Path::new(&image), &options).unwrap();
        assert_eq!(art, "        \n".repeat(4));
    }

    #[test]
    fn test_generate_rejects_bad_charset_flag() {
        let dir = tempdir().unwrap();
        let (config, image) = setup(dir.path());
        let args = parse(&[
            "asciigen", "generate", &image, "--config", &config, "--charset", "x",
        ]);

        assert!(prepare(&args, &Printer::new()).is_err());
    }
}
