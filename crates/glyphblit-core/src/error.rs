//! Error types for glyphblit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlitError>;

/// Main error type for glyphblit
#[derive(Debug, Error)]
pub enum BlitError {
    #[error("Glyph source failed: {0}")]
    GlyphSource(#[from] GlyphSourceError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by a glyph source while resolving or rasterizing glyphs
#[derive(Debug, Error)]
pub enum GlyphSourceError {
    #[error("Glyph {0} not found")]
    GlyphNotFound(u32),

    #[error("Outline extraction failed for glyph {0}")]
    OutlineFailed(u32),

    #[error("Invalid font data")]
    InvalidFont,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Invalid pixel size: {0}")]
    InvalidSize(f32),
}

/// Pixel buffer errors
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
