//! Render-layer errors.

use thiserror::Error;
use tftfont_core::FormatError;

/// Errors from rendering and PNG export.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The text could not be measured under this font.
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// PNG has no representation for an image without pixels.
    #[error("cannot encode an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}
