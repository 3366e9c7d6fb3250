//! Ratio-based contrast and brightness.
//!
//! Both adjustments blend every colour channel between a degenerate value
//! and the original: `degenerate + ratio * (original - degenerate)`. A ratio
//! of 1.0 returns the image unchanged. Alpha is never touched.

use image::DynamicImage;

/// Blend contrast against the image's mean luminance.
///
/// Ratios above 1.0 push channels away from the mean, below 1.0 pull them
/// towards it, 0.0 yields a flat grey image.
pub fn adjust_contrast(image: &DynamicImage, ratio: f32) -> DynamicImage {
    let mean = mean_luma(image);
    blend_channels(image, mean, ratio)
}

/// Blend brightness against black.
///
/// Ratios above 1.0 brighten, below 1.0 darken, 0.0 yields black.
pub fn adjust_brightness(image: &DynamicImage, ratio: f32) -> DynamicImage {
    blend_channels(image, 0.0, ratio)
}

/// Rounded mean of the image's luminance channel.
fn mean_luma(image: &DynamicImage) -> f32 {
    let luma = image.to_luma8();
    let count = u64::from(luma.width()) * u64::from(luma.height());
    if count == 0 {
        return 0.0;
    }
    let total: u64 = luma.pixels().map(|p| u64::from(p.0[0])).sum();
    (total as f64 / count as f64).round() as f32
}

fn blend_channels(image: &DynamicImage, degenerate: f32, ratio: f32) -> DynamicImage {
    let mut rgba = image.to_rgba8();
    for pixel in rgba.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            let value = degenerate + ratio * (f32::from(*channel) - degenerate);
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
    }
    DynamicImage::ImageRgba8(rgba)
}
