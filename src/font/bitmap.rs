//! Built-in bitmap font backed by `font8x8`.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{GrayImage, Luma};

use crate::error::{AsciiError, Result};

use super::{GlyphRasterizer, INK, PAPER};

/// Glyph width of the font8x8 bitmaps.
const GLYPH_WIDTH: u32 = 8;

/// Glyph height of the font8x8 bitmaps, before row scaling.
const GLYPH_HEIGHT: u32 = 8;

/// The font8x8 basic block (U+0000 to U+007F).
///
/// Each font row can be repeated `row_scale` times to stretch the cell
/// vertically without changing the relative density of glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font8x8 {
    row_scale: u32,
}

impl Font8x8 {
    /// Create a font with each row repeated `row_scale` times (minimum 1).
    pub fn new(row_scale: u32) -> Self {
        Self {
            row_scale: row_scale.max(1),
        }
    }

    /// 8x8 cell.
    pub fn square() -> Self {
        Self::new(1)
    }

    /// 8x16 cell.
    pub fn tall() -> Self {
        Self::new(2)
    }
}

impl Default for Font8x8 {
    fn default() -> Self {
        Self::tall()
    }
}

impl GlyphRasterizer for Font8x8 {
    fn cell_size(&self) -> (u32, u32) {
        (GLYPH_WIDTH, GLYPH_HEIGHT * self.row_scale)
    }

    fn render(&self, ch: char) -> Result<GrayImage> {
        let rows = BASIC_FONTS
            .get(ch)
            .ok_or(AsciiError::UnsupportedGlyph { ch })?;
        let (width, height) = self.cell_size();

        // LSB of each row byte is the leftmost pixel
        Ok(GrayImage::from_fn(width, height, |x, y| {
            let row = rows[(y / self.row_scale) as usize];
            let set = row & (1 << x) != 0;
            Luma([if set { INK } else { PAPER }])
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::ink_coverage;

    #[test]
    fn test_space_is_blank() {
        let glyph = Font8x8::square().render(' ').unwrap();
        assert_eq!(glyph.dimensions(), (8, 8));
        assert_eq!(ink_coverage(&glyph), 0);
    }

    #[test]
    fn test_tall_doubles_coverage() {
        for ch in ['@', '#', '.', 'x', 'M'] {
            let square = ink_coverage(&Font8x8::square().render(ch).unwrap());
            let tall = ink_coverage(&Font8x8::tall().render(ch).unwrap());
            assert!(square > 0, "{ch:?} should have ink");
            assert_eq!(tall, square * 2, "{ch:?}");
        }
    }

    #[test]
    fn test_dense_glyphs_have_more_ink() {
        let font = Font8x8::square();
        let at = ink_coverage(&font.render('@').unwrap());
        let dot = ink_coverage(&font.render('.').unwrap());
        assert!(at > dot);
    }

    #[test]
    fn test_outside_basic_block_unsupported() {
        let err = Font8x8::square().render('é').unwrap_err();
        assert!(matches!(err, AsciiError::UnsupportedGlyph { ch: 'é' }));
    }

    #[test]
    fn test_row_scale_minimum() {
        assert_eq!(Font8x8::new(0), Font8x8::square());
    }
}
