//! # Image Directory

use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use super::errors::{ImageError, ImageResult};
use super::{Image, ImageLoader};

/// Loads images from files under a base directory.
#[derive(Debug, Clone)]
pub struct ImageDirectory {
    root: PathBuf,
}

impl ImageDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, reference: &str) -> ImageResult<PathBuf> {
        let relative = Path::new(reference);
        let escapes = relative.components().any(|c| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if reference.is_empty() || escapes {
            return Err(ImageError::InvalidReference(reference.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl ImageLoader for ImageDirectory {
    fn load(&self, reference: &str) -> ImageResult<Image> {
        let path = self.full_path(reference)?;

        let io_error = |e: io::Error| {
            if e.kind() == io::ErrorKind::NotFound {
                ImageError::NotFound(reference.to_string())
            } else {
                ImageError::Io {
                    reference: reference.to_string(),
                    message: e.to_string(),
                }
            }
        };

        // Handle is dropped on every return path
        let mut file = File::open(&path).map_err(io_error)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).map_err(io_error)?;

        Ok(Image::new(data, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ImageDirectory) {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.png"), b"image a").unwrap();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        std::fs::write(temp_dir.path().join("sub").join("b.png"), b"image b").unwrap();
        let images = ImageDirectory::new(temp_dir.path());
        (temp_dir, images)
    }

    #[test]
    fn test_load_existing() {
        let (_temp_dir, images) = setup();
        let image = images.load("a.png").unwrap();
        assert_eq!(image.data(), b"image a");
        assert_eq!(image.extension(), "png");
    }

    #[test]
    fn test_load_nested() {
        let (_temp_dir, images) = setup();
        assert_eq!(images.load("sub/b.png").unwrap().data(), b"image b");
    }

    #[test]
    fn test_missing_is_not_found() {
        let (_temp_dir, images) = setup();
        let err = images.load("missing.png").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.reference(), "missing.png");
    }

    #[test]
    fn test_rejects_escaping_reference() {
        let (_temp_dir, images) = setup();
        assert!(matches!(
            images.load("../a.png"),
            Err(ImageError::InvalidReference(_))
        ));
        assert!(matches!(
            images.load("/etc/passwd"),
            Err(ImageError::InvalidReference(_))
        ));
        assert!(matches!(images.load(""), Err(ImageError::InvalidReference(_))));
    }

    #[test]
    fn test_reads_again_each_time() {
        let (temp_dir, images) = setup();
        let first = images.load("a.png").unwrap();
        std::fs::write(temp_dir.path().join("a.png"), b"changed").unwrap();
        let second = images.load("a.png").unwrap();
        assert_ne!(first.identifier(), second.identifier());
    }
}
