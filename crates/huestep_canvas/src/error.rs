//! Error types for image loading and card rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a background photo.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    /// The image file could not be read
    #[error("Failed to read image {path:?}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded to zero width or height
    #[error("Image has no pixels")]
    Empty,
}

/// Errors that can occur while rendering or exporting a card.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The background photo failed to load; nothing was drawn
    #[error("Image load error: {0}")]
    ImageLoad(#[from] ImageLoadError),

    /// Requested output size cannot be allocated
    #[error("Invalid render size: {0}")]
    InvalidSize(u32),

    /// No fonts are available to draw the card text
    #[error("No system fonts found. Please install DejaVu fonts or another sans-serif font.")]
    NoFonts,

    /// PNG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[source] image::ImageError),

    /// Writing the exported file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
