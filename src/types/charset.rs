//! Character sets used as palette input.

use std::fmt;
use std::str::FromStr;

use crate::error::{AsciiError, Result};

/// Printable ASCII without whitespace other than the space character:
/// letters, digits, punctuation, then space.
pub const PRINTABLE: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " ",
);

/// A validated, ordered set of distinct characters.
///
/// Holds at least two characters. The only whitespace allowed is `' '`;
/// tabs, newlines and other control characters would break row alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Validate and build a charset from its characters, keeping their order.
    pub fn new(source: &str) -> Result<Self> {
        let mut chars: Vec<char> = Vec::with_capacity(source.len());

        for ch in source.chars() {
            if ch != ' ' && (ch.is_whitespace() || ch.is_control()) {
                return Err(AsciiError::InvalidCharset {
                    message: format!("{ch:?} is not allowed"),
                    help: Some("Only printable characters and ' ' may be used".to_string()),
                });
            }
            if chars.contains(&ch) {
                return Err(AsciiError::InvalidCharset {
                    message: format!("{ch:?} appears more than once"),
                    help: None,
                });
            }
            chars.push(ch);
        }

        if chars.len() < 2 {
            return Err(AsciiError::InvalidCharset {
                message: format!("need at least 2 characters, got {}", chars.len()),
                help: Some("A palette needs a darkest and a lightest character".to_string()),
            });
        }

        Ok(Self { chars })
    }

    /// Characters in enumeration order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a charset holds at least two characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            chars: PRINTABLE.chars().collect(),
        }
    }
}

impl FromStr for Charset {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
