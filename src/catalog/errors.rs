//! # Catalog Errors

use thiserror::Error;

use crate::image::ImageError;
use crate::schema::SchemaError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that abort building a catalog or a deck
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    ImageNotFound(ImageError),

    #[error(transparent)]
    Image(ImageError),
}

impl From<ImageError> for CatalogError {
    fn from(e: ImageError) -> Self {
        if e.is_not_found() {
            CatalogError::ImageNotFound(e)
        } else {
            CatalogError::Image(e)
        }
    }
}
