//! Brightness-ranked character palettes.
//!
//! A palette orders characters from darkest (most ink) to lightest (least
//! ink). Ranking is a stable sort on measured glyph coverage, so characters
//! with equal coverage keep their charset order and the same charset and
//! font always produce the same palette.

use std::fmt;

use serde::Serialize;

use crate::error::{AsciiError, Result};
use crate::font::{ink_coverage, missing_glyph, GlyphRasterizer};

use super::Charset;

/// A character with its measured ink coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedGlyph {
    pub ch: char,

    /// Number of ink pixels in the rendered glyph.
    pub density: u32,

    /// True when the font had no glyph and the missing-glyph box was measured.
    pub fallback: bool,
}

/// Characters ordered darkest first.
///
/// Built once from a charset and a font, then read-only. Always holds at
/// least two characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Measure and rank every character of `charset` with `font`.
    pub fn build(charset: &Charset, font: &impl GlyphRasterizer) -> Self {
        // A charset holds at least two characters, so the ranking does too
        Self {
            chars: Self::rank(charset, font).iter().map(|g| g.ch).collect(),
        }
    }

    /// Measure every character and sort darkest first, keeping densities.
    ///
    /// Characters the font cannot draw are measured as the missing-glyph box.
    pub fn rank(charset: &Charset, font: &impl GlyphRasterizer) -> Vec<RankedGlyph> {
        let (width, height) = font.cell_size();

        let mut ranked: Vec<RankedGlyph> = charset
            .chars()
            .iter()
            .map(|&ch| {
                let (bitmap, fallback) = match font.render(ch) {
                    Ok(bitmap) => (bitmap, false),
                    Err(_) => (missing_glyph(width, height), true),
                };
                RankedGlyph {
                    ch,
                    density: ink_coverage(&bitmap),
                    fallback,
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.density.cmp(&a.density));
        ranked
    }

    /// Keep only the characters of a glyph list returned by `rank`.
    ///
    /// Fails with `InvalidCharset` for fewer than two glyphs.
    pub fn from_ranked(ranked: &[RankedGlyph]) -> Result<Self> {
        if ranked.len() < 2 {
            return Err(AsciiError::InvalidCharset {
                message: format!("need at least 2 ranked glyphs, got {}", ranked.len()),
                help: Some("Rank a validated charset with Palette::rank".to_string()),
            });
        }

        Ok(Self {
            chars: ranked.iter().map(|g| g.ch).collect(),
        })
    }

    /// Characters, darkest first.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character with the most ink.
    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    /// The character with the least ink.
    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Palette index for a luminance value.
    ///
    /// Computes `floor(luma / 255 * (len - 1) + 0.5)` exactly in integers,
    /// so 0 maps to the darkest and 255 to the lightest character.
    pub fn index_for(&self, luma: u8) -> usize {
        let last = self.chars.len().saturating_sub(1);
        let index = (usize::from(luma) * last * 2 + 255) / 510;
        index.min(last)
    }

    /// Palette character for a luminance value.
    pub fn char_for(&self, luma: u8) -> char {
        self.chars[self.index_for(luma)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::build(&Charset::default(), &crate::font::Font8x8::default())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
