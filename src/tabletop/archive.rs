//! Room archive writer
//!
//! Archive contents:
//! - data.xml (room document)
//! - <sha256>.<ext> for every distinct image
//!
//! Any failure after the archive file is created removes it again.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::room::Room;

/// Name of the room document inside the archive
pub const DATA_XML: &str = "data.xml";

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Archive writing errors
#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    #[error("Failed to write archive {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("Zip error in {}: {message}", path.display())]
    Zip { path: PathBuf, message: String },
}

/// Summary of a written archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub deck_count: usize,
    pub card_count: usize,
    pub image_count: usize,
    pub size_bytes: u64,
}

impl Room {
    /// Write the room to a zip archive at `path`.
    ///
    /// A file this call created is removed again if writing it fails. A path
    /// that could not be created is never touched.
    pub fn write_zip(&self, path: &Path) -> ArchiveResult<ArchiveSummary> {
        let file = File::create(path).map_err(|e| ArchiveError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let result = self.write_zip_contents(file, path);
        if result.is_err() {
            // Best effort, already failing
            let _ = fs::remove_file(path);
        }
        result
    }

    fn write_zip_contents(&self, file: File, path: &Path) -> ArchiveResult<ArchiveSummary> {
        let io_error = |e: std::io::Error| ArchiveError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let zip_error = |e: zip::result::ZipError| ArchiveError::Zip {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(DATA_XML, options).map_err(zip_error)?;
        zip.write_all(self.to_xml().as_bytes()).map_err(io_error)?;

        let images = self.images();
        for image in &images {
            zip.start_file(image.file_name(), options).map_err(zip_error)?;
            zip.write_all(image.data()).map_err(io_error)?;
        }

        let file = zip.finish().map_err(zip_error)?;
        file.sync_all().map_err(io_error)?;
        let size_bytes = file.metadata().map_err(io_error)?.len();

        Ok(ArchiveSummary {
            path: path.to_path_buf(),
            deck_count: self.decks().len(),
            card_count: self.decks().iter().map(|placed| placed.deck.len()).sum(),
            image_count: images.len(),
            size_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::tabletop::{Card, Deck, GameTable, TableBackground};
    use std::io::Read;
    use tempfile::TempDir;

    fn image(bytes: &[u8]) -> Image {
        Image::new(bytes.to_vec(), "x.png")
    }

    fn sample_room() -> Room {
        let back = image(b"back");
        let spells = Deck::new(
            "Spells",
            vec![
                Card::new("Fireball", image(b"a"), back.clone(), 2),
                Card::new("Heal", image(b"c"), back.clone(), 2),
            ],
        );
        let monsters = Deck::new("Monsters", vec![Card::new("Goblin", image(b"g"), back, 2)]);

        let mut room = Room::new(GameTable::new("Table", TableBackground::Default));
        room.add_deck(spells, 0, 0);
        room.add_deck(monsters, 100, 0);
        room
    }

    #[test]
    fn test_archive_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("room.zip");

        let summary = sample_room().write_zip(&path).unwrap();
        assert_eq!(summary.deck_count, 2);
        assert_eq!(summary.card_count, 3);
        assert_eq!(summary.image_count, 4);
        assert!(summary.size_bytes > 0);

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 5);

        let mut xml = String::new();
        archive.by_name(DATA_XML).unwrap().read_to_string(&mut xml).unwrap();
        assert!(xml.contains("Goblin"));

        let back = image(b"back");
        let mut data = Vec::new();
        archive
            .by_name(&back.file_name())
            .unwrap()
            .read_to_end(&mut data)
            .unwrap();
        assert_eq!(data, b"back");
    }

    #[test]
    fn test_missing_parent_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("room.zip");

        let err = sample_room().write_zip(&path).unwrap_err();
        assert!(matches!(err, ArchiveError::Io { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_uncreatable_path_is_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target_dir");
        fs::create_dir(&target).unwrap();
        let path = temp_dir.path().join("room.zip");
        std::os::unix::fs::symlink(&target, &path).unwrap();

        let err = sample_room().write_zip(&path).unwrap_err();
        assert!(matches!(err, ArchiveError::Io { .. }));
        assert!(fs::symlink_metadata(&path).is_ok());
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_archive_survives() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("room.zip");
        fs::write(&path, b"previous archive").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Permission bits do not bind a privileged user
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        assert!(sample_room().write_zip(&path).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"previous archive");
    }

    #[test]
    fn test_empty_room() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.zip");

        let room = Room::new(GameTable::new("Table", TableBackground::Default));
        let summary = room.write_zip(&path).unwrap();
        assert_eq!(summary.image_count, 0);

        let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }
}
