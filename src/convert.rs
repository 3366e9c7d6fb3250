//! Image file to ASCII art conversion.
//!
//! Loads an image, applies optional contrast and brightness, scales it to the
//! requested width and hands it to the `ArtRenderer`.

use std::path::Path;

use image::DynamicImage;

use crate::error::{AsciiError, Result};
use crate::font::Font8x8;
use crate::render::{adjust_brightness, adjust_contrast, ArtRenderer};
use crate::types::Charset;

/// Per-conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    /// Output width in characters (default: image width in pixels).
    pub width: Option<u32>,

    /// Brightness ratio, 1.0 is unchanged.
    pub brightness: Option<f32>,

    /// Contrast ratio, 1.0 is unchanged.
    pub contrast: Option<f32>,
}

/// Scale `(width, height)` so the width becomes `target_width`, keeping the
/// aspect ratio. Each side is rounded to the nearest whole pixel.
pub fn scaled_dimensions(width: u32, height: u32, target_width: Option<u32>) -> (u32, u32) {
    let Some(target) = target_width else {
        return (width, height);
    };
    if width == 0 {
        return (0, 0);
    }

    let scale = f64::from(target) / f64::from(width);
    (
        (f64::from(width) * scale).round() as u32,
        (f64::from(height) * scale).round() as u32,
    )
}

/// Converts images to text with a fixed renderer.
#[derive(Debug, Clone)]
pub struct Converter {
    renderer: ArtRenderer,
}

impl Converter {
    pub fn new(renderer: ArtRenderer) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &ArtRenderer {
        &self.renderer
    }

    /// Load the image at `path` and render it.
    pub fn render_path(&self, path: &Path, options: &RenderOptions) -> Result<String> {
        let image = image::open(path).map_err(|e| AsciiError::ImageLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.render_image(image, options)
    }

    /// Render an already decoded image.
    pub fn render_image(&self, image: DynamicImage, options: &RenderOptions) -> Result<String> {
        let (width, height) = scaled_dimensions(image.width(), image.height(), options.width);
        if width == 0 || height == 0 {
            return Err(AsciiError::InvalidDimensions { width, height });
        }

        let mut image = image;
        if let Some(contrast) = options.contrast {
            image = adjust_contrast(&image, check_ratio("contrast", contrast)?);
        }
        if let Some(brightness) = options.brightness {
            image = adjust_brightness(&image, check_ratio("brightness", brightness)?);
        }

        let art = self.renderer.generate(&image, Some(width), Some(height))?;
        Ok(art.into_string())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ArtRenderer::from_font(&Charset::default(), &Font8x8::default()))
    }
}

fn check_ratio(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AsciiError::InvalidRatio { name, value })
    }
}

/// Render the image at `path` with the built-in palette and font.
///
/// Ranks all 95 printable characters on every call. Callers rendering more
/// than one image should build a `Converter` once and reuse it.
pub fn render_from_path(
    path: impl AsRef<Path>,
    width: Option<u32>,
    brightness: Option<f32>,
    contrast: Option<f32>,
) -> Result<String> {
    let options = RenderOptions {
        width,
        brightness,
        contrast,
    };
    Converter::default().render_path(path.as_ref(), &options)
}
