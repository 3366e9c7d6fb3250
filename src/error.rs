use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asciigen operations
#[derive(Error, Diagnostic, Debug)]
pub enum AsciiError {
    #[error("IO error: {0}")]
    #[diagnostic(code(asciigen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(asciigen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to load image {path}: {message}")]
    #[diagnostic(
        code(asciigen::image_load),
        help("Check that the file exists and is a supported raster format")
    )]
    ImageLoad {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid output dimensions: {width}x{height}")]
    #[diagnostic(
        code(asciigen::dimensions),
        help("Width and height must both resolve to at least one character")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No glyph for character {ch:?}")]
    #[diagnostic(code(asciigen::glyph))]
    UnsupportedGlyph { ch: char },

    #[error("Invalid charset: {message}")]
    #[diagnostic(code(asciigen::charset))]
    InvalidCharset {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid {name} ratio: {value}")]
    #[diagnostic(
        code(asciigen::ratio),
        help("Ratios must be finite and non-negative (1.0 leaves the image unchanged)")
    )]
    InvalidRatio { name: &'static str, value: f32 },

    #[error("JSON error: {0}")]
    #[diagnostic(code(asciigen::json))]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {message}")]
    #[diagnostic(code(asciigen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AsciiError>;
