//! Art renderer - converts images to character grids.
//!
//! The image is resampled to one pixel per character cell, converted to
//! luminance and each pixel is replaced by the palette character of matching
//! brightness.

use std::fmt;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{AsciiError, Result};
use crate::font::GlyphRasterizer;
use crate::types::{Charset, Palette};

/// Rows needed for `height` so that glyph cells of `glyph_width` x
/// `glyph_height` keep the source proportions.
///
/// Rounds half away from zero: `6 / 13` of 100 rows is 46.
pub fn adjusted_height(height: u32, glyph_width: u32, glyph_height: u32) -> u32 {
    if glyph_height == 0 {
        return 0;
    }
    (f64::from(height) * f64::from(glyph_width) / f64::from(glyph_height)).round() as u32
}

/// Bytes for `rows` rows of `width` single-byte characters plus terminators.
fn text_capacity(width: u32, rows: u32) -> usize {
    (width as usize).saturating_add(1).saturating_mul(rows as usize)
}

/// A rendered character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    width: u32,
    height: u32,

    /// Rows of `width` characters, each followed by `\n`.
    text: String,
}

impl AsciiArt {
    /// Characters per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows without their terminators.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders images with a fixed palette and glyph cell.
#[derive(Debug, Clone)]
pub struct ArtRenderer {
    palette: Palette,

    /// Glyph cell as (width, height) in pixels.
    cell: (u32, u32),
}

impl ArtRenderer {
    /// Create a renderer from a built palette and the cell size of the font
    /// it was measured with.
    pub fn new(palette: Palette, cell: (u32, u32)) -> Self {
        Self { palette, cell }
    }

    /// Rank `charset` with `font` and render with its cell size.
    pub fn from_font(charset: &Charset, font: &impl GlyphRasterizer) -> Self {
        Self::new(Palette::build(charset, font), font.cell_size())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn cell_size(&self) -> (u32, u32) {
        self.cell
    }

    /// Render `image` as a grid `width` characters wide.
    ///
    /// Missing dimensions default to the image's pixel size. `height` is the
    /// requested height before aspect correction; the grid has
    /// `adjusted_height(height, ..)` rows.
    pub fn generate(
        &self,
        image: &DynamicImage,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<AsciiArt> {
        let width = width.unwrap_or_else(|| image.width());
        let height = height.unwrap_or_else(|| image.height());
        let rows = adjusted_height(height, self.cell.0, self.cell.1);

        if width == 0 || rows == 0 {
            return Err(AsciiError::InvalidDimensions {
                width,
                height: rows,
            });
        }

        let grid = image
            .resize_exact(width, rows, FilterType::Lanczos3)
            .to_luma8();

        let mut text = String::with_capacity(text_capacity(width, rows));
        for row in grid.rows() {
            text.extend(row.map(|pixel| self.palette.char_for(pixel.0[0])));
            text.push('\n');
        }

        Ok(AsciiArt {
            width,
            height: rows,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::TableFont;
    use crate::font::{Font8x8, GlyphRasterizer};
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    fn square_renderer() -> ArtRenderer {
        let font = TableFont::new((4, 4), &[('@', 16), ('#', 10), ('+', 6), ('-', 4), ('.', 2)]);
        ArtRenderer::from_font(&Charset::new("@#+-.").unwrap(), &font)
    }

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
    }

    #[test]
    fn test_adjusted_height() {
        assert_eq!(adjusted_height(100, 6, 13), 46);
        assert_eq!(adjusted_height(25, 8, 16), 13);
        assert_eq!(adjusted_height(10, 8, 8), 10);
        assert_eq!(adjusted_height(1, 8, 16), 1);
        assert_eq!(adjusted_height(10, 8, 0), 0);
    }

    #[test]
    fn test_text_capacity_does_not_wrap() {
        assert_eq!(text_capacity(10, 5), 55);
        assert_eq!(
            text_capacity(u32::MAX, 2),
            (u32::MAX as usize + 1) * 2
        );
    }

    #[test]
    fn test_gradient_snapshot() {
        let image = GrayImage::from_raw(3, 2, vec![0, 64, 128, 191, 255, 250]).unwrap();
        let art = square_renderer()
            .generate(&DynamicImage::ImageLuma8(image), None, None)
            .unwrap();

        insta::assert_snapshot!(art.as_str().trim_end(), @r"
        @#+
        -..
        ");
    }

    #[test]
    fn test_output_shape() {
        let renderer = ArtRenderer::from_font(&Charset::default(), &Font8x8::tall());
        let image = solid(37, 23, 128);

        let art = renderer.generate(&image, Some(21), Some(30)).unwrap();

        assert_eq!(art.width(), 21);
        assert_eq!(art.height(), 15);
        assert_eq!(art.as_str().matches('\n').count(), 15);
        assert!(art.as_str().ends_with('\n'));
        for row in art.rows() {
            assert_eq!(row.chars().count(), 21);
        }
    }

    #[test]
    fn test_white_renders_lightest() {
        let renderer = ArtRenderer::from_font(&Charset::default(), &Font8x8::square());
        let art = renderer.generate(&solid(10, 10, 255), Some(10), None).unwrap();

        let lightest = renderer.palette().lightest();
        let expected = format!("{}\n", lightest.to_string().repeat(10)).repeat(10);
        assert_eq!(art.as_str(), expected);
    }

    #[test]
    fn test_black_renders_darkest() {
        let renderer = ArtRenderer::from_font(&Charset::default(), &Font8x8::square());
        let art = renderer.generate(&solid(10, 10, 0), Some(10), None).unwrap();

        let darkest = renderer.palette().darkest();
        let expected = format!("{}\n", darkest.to_string().repeat(10)).repeat(10);
        assert_eq!(art.as_str(), expected);
    }

    #[test]
    fn test_tall_cell_halves_rows() {
        let font = Font8x8::tall();
        let renderer = ArtRenderer::from_font(&Charset::default(), &font);
        let art = renderer.generate(&solid(10, 10, 255), Some(10), None).unwrap();

        assert_eq!(font.cell_size(), (8, 16));
        assert_eq!(art.height(), 5);
        assert!(art.rows().all(|row| row == "          "));
    }

    #[test]
    fn test_zero_width_is_invalid() {
        let err = square_renderer()
            .generate(&solid(10, 10, 255), Some(0), None)
            .unwrap_err();
        assert!(matches!(
            err,
            AsciiError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_zero_height_image_is_invalid() {
        let empty = DynamicImage::ImageLuma8(GrayImage::new(10, 0));
        let err = square_renderer().generate(&empty, None, None).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidDimensions { height: 0, .. }));
    }

    #[test]
    fn test_row_major_orientation() {
        // Dark left column, light everywhere else
        let image = GrayImage::from_fn(3, 3, |x, _| Luma([if x == 0 { 0 } else { 255 }]));
        let art = square_renderer()
            .generate(&DynamicImage::ImageLuma8(image), None, None)
            .unwrap();

        assert_eq!(art.as_str(), "@..\n@..\n@..\n");
    }
}
