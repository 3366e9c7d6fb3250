//! Glyph rasterization.
//!
//! Palette ranking only needs two things from a font: the size of its
//! monospace cell and a bitmap of each character. Glyph bitmaps are
//! `GrayImage`s drawn in ink (`0`) on paper (`255`).

mod bitmap;
#[cfg(test)]
pub(crate) mod testing;

use clap::ValueEnum;
use image::{GrayImage, Luma};
use serde::Deserialize;

use crate::error::Result;

pub use bitmap::Font8x8;

/// Pixel value of ink in a glyph bitmap.
pub const INK: u8 = 0;

/// Pixel value of the empty background in a glyph bitmap.
pub const PAPER: u8 = 255;

/// A monospace font that can draw single characters.
pub trait GlyphRasterizer {
    /// Width and height of the glyph cell in pixels.
    fn cell_size(&self) -> (u32, u32);

    /// Draw `ch` alone into a bitmap of `cell_size()`.
    ///
    /// Returns `AsciiError::UnsupportedGlyph` when the font has no glyph for `ch`.
    fn render(&self, ch: char) -> Result<GrayImage>;
}

/// Shape of the built-in glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// 8x8 cell, one bitmap row per font row.
    Square,
    /// 8x16 cell with every font row doubled, close to a terminal cell.
    #[default]
    Tall,
}

impl FontStyle {
    /// Build the rasterizer for this style.
    pub fn rasterizer(self) -> Font8x8 {
        match self {
            FontStyle::Square => Font8x8::square(),
            FontStyle::Tall => Font8x8::tall(),
        }
    }
}

/// Count the ink pixels in a glyph bitmap.
pub fn ink_coverage(bitmap: &GrayImage) -> u32 {
    bitmap.pixels().filter(|p| p.0[0] == INK).count() as u32
}

/// The "missing glyph" box: a one-pixel outline of the cell.
pub fn missing_glyph(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let edge = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
        Luma([if edge { INK } else { PAPER }])
    })
}
