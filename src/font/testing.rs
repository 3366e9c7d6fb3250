//! Fixed-density rasterizer for tests.

use image::{GrayImage, Luma};

use crate::error::{AsciiError, Result};

use super::{GlyphRasterizer, INK, PAPER};

/// Draws each known character as its first `density` pixels in ink.
pub(crate) struct TableFont {
    pub cell: (u32, u32),
    pub glyphs: Vec<(char, u32)>,
}

impl TableFont {
    pub fn new(cell: (u32, u32), glyphs: &[(char, u32)]) -> Self {
        Self {
            cell,
            glyphs: glyphs.to_vec(),
        }
    }
}

impl GlyphRasterizer for TableFont {
    fn cell_size(&self) -> (u32, u32) {
        self.cell
    }

    fn render(&self, ch: char) -> Result<GrayImage> {
        let density = self
            .glyphs
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, d)| *d)
            .ok_or(AsciiError::UnsupportedGlyph { ch })?;
        let (width, height) = self.cell;

        Ok(GrayImage::from_fn(width, height, |x, y| {
            let inked = y * width + x < density;
            Luma([if inked { INK } else { PAPER }])
        }))
    }
}
