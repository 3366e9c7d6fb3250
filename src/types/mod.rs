//! Core domain types for asciigen.
//!
//! - `Charset` - validated input characters
//! - `Palette` - characters ranked darkest first by glyph coverage

mod charset;
mod palette;

pub use charset::{Charset, PRINTABLE};
pub use palette::{Palette, RankedGlyph};
