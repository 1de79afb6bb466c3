//! # Image Loading
//!
//! Card images are referenced by file name from the definition table and
//! resolved to raw bytes on demand through an [`ImageLoader`].
//!
//! Nothing is cached: every call reads the file again, even for a name that
//! was already loaded.

mod directory;
mod errors;

pub use directory::ImageDirectory;
pub use errors::{ImageError, ImageResult};

use sha2::{Digest, Sha256};

/// Resolves an image reference to its bytes.
pub trait ImageLoader {
    /// Load the image named by `reference`.
    ///
    /// Fails with `ImageError::NotFound` when nothing exists under that name.
    fn load(&self, reference: &str) -> ImageResult<Image>;
}

/// Raw image bytes with their content identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    identifier: String,
    extension: String,
}

impl Image {
    /// Wrap raw bytes. `reference` is only used as an extension fallback when
    /// the format cannot be sniffed from the content.
    pub fn new(data: Vec<u8>, reference: &str) -> Self {
        let identifier = content_identifier(&data);
        let extension = sniff_extension(&data)
            .map(str::to_string)
            .or_else(|| reference_extension(reference))
            .unwrap_or_else(|| "bin".to_string());

        Self {
            data,
            identifier,
            extension,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Lowercase hex SHA-256 of the content.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Archive entry name: `<identifier>.<extension>`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.identifier, self.extension)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// SHA-256 of `data` as lowercase hex.
pub fn content_identifier(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

fn sniff_extension(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("jpg")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("gif")
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("webp")
    } else {
        None
    }
}

fn reference_extension(reference: &str) -> Option<String> {
    std::path::Path::new(reference)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_ascii_lowercase())
}
