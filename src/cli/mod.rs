pub mod completions;
pub mod generate;
pub mod palette;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::font::FontStyle;
use crate::output::{display_path, Printer};
use crate::types::Charset;

/// asciigen - ASCII art from raster images
#[derive(Parser, Debug)]
#[command(name = "asciigen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an image file as ASCII art
    Generate(generate::GenerateArgs),

    /// Show the characters ranked from darkest to lightest
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that build a palette
#[derive(Args, Debug, Default)]
pub struct PaletteSource {
    /// Glyph cell used to measure characters [default: tall]
    #[arg(long, value_enum)]
    pub font: Option<FontStyle>,

    /// Characters to rank (default: printable ASCII)
    #[arg(long)]
    pub charset: Option<String>,

    /// Config file (default: ./asciigen.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PaletteSource {
    /// Load the explicit or discovered config, or defaults when there is none.
    pub fn load_config(&self, printer: &Printer) -> Result<Config> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => Config::find(Path::new(".")),
        };

        match path {
            Some(path) => {
                let config = Config::load(&path)?;
                printer.info("Loaded", &display_path(&path));
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Font style, flag over config.
    pub fn font(&self, config: &Config) -> FontStyle {
        self.font.unwrap_or(config.font)
    }

    /// Charset, flag over config.
    pub fn charset(&self, config: &Config) -> Result<Charset> {
        match &self.charset {
            Some(chars) => Charset::new(chars),
            None => config.charset(),
        }
    }
}
