//! Rendering module for asciigen.
//!
//! This module handles converting images to character grids using a
//! brightness-ranked palette, plus the contrast and brightness adjustments
//! applied beforehand.

mod art;
mod enhance;

pub use art::{adjusted_height, ArtRenderer, AsciiArt};
pub use enhance::{adjust_brightness, adjust_contrast};
