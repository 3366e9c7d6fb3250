//! Configuration file (asciigen.yaml) parsing.
//!
//! The config file supplies default render options, the charset and the
//! glyph cell. Command-line flags take precedence over every value here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::convert::RenderOptions;
use crate::error::{AsciiError, Result};
use crate::font::FontStyle;
use crate::types::Charset;

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "asciigen.yaml";

/// Defaults loaded from asciigen.yaml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output width in characters.
    pub width: Option<u32>,

    /// Contrast ratio.
    pub contrast: Option<f32>,

    /// Brightness ratio.
    pub brightness: Option<f32>,

    /// Characters to rank instead of printable ASCII.
    pub charset: Option<String>,

    /// Glyph cell shape.
    pub font: FontStyle,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AsciiError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| AsciiError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Find the config file in `dir`, if there is one.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILENAME);
        path.is_file().then_some(path)
    }

    /// The validated charset, printable ASCII when unset.
    pub fn charset(&self) -> Result<Charset> {
        match &self.charset {
            Some(chars) => Charset::new(chars),
            None => Ok(Charset::default()),
        }
    }

    /// Render options from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            brightness: self.brightness,
            contrast: self.contrast,
        }
    }
}
