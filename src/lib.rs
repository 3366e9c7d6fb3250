//! asciigen - ASCII art from raster images
//!
//! Ranks a character set by how much ink each glyph uses, then renders an
//! image as a grid of those characters, one character per resampled pixel.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod font;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use convert::{render_from_path, scaled_dimensions, Converter, RenderOptions};
pub use error::{AsciiError, Result};
pub use font::{Font8x8, FontStyle, GlyphRasterizer};
pub use render::{adjusted_height, ArtRenderer, AsciiArt};
pub use types::{Charset, Palette, RankedGlyph};
