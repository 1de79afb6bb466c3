//! # Image Errors

use thiserror::Error;

/// Result type for image operations
pub type ImageResult<T> = Result<T, ImageError>;

/// Image loading errors
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Invalid image reference: {0}")]
    InvalidReference(String),

    #[error("Failed to read image '{reference}': {message}")]
    Io { reference: String, message: String },
}

impl ImageError {
    /// The reference the error is about
    pub fn reference(&self) -> &str {
        match self {
            ImageError::NotFound(r) | ImageError::InvalidReference(r) => r,
            ImageError::Io { reference, .. } => reference,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ImageError::NotFound(_))
    }
}
