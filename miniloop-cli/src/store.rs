//! File-backed blob store
//!
//! One file holds the serialized board. Writes go through a temp file in
//! the same directory followed by a rename, so a crash mid-write never
//! leaves a half-written board behind.

use miniloop_board::{BlobStore, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "miniloop";
const BOARD_FILE_NAME: &str = "board.json";

/// A [`BlobStore`] over a single file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform data directory slot: `<data_dir>/miniloop/board.json`
    pub fn default_location() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(BOARD_FILE_NAME)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileStore {
    fn get(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, text: &str) -> Result<()> {
        atomic_write(&self.path, text.as_bytes())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Write via a temp file in the same directory, then rename (atomic on the
/// same filesystem).
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
