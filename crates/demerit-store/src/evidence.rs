//! # Evidence File Store
//!
//! Writes uploaded evidence files to a local directory. Stored filenames
//! are prefixed with a random UUID so two uploads with the same client
//! filename never collide, and the client-supplied name is reduced to its
//! final path component before use.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Fallback name for uploads whose client filename is absent or unusable.
const DEFAULT_FILENAME: &str = "evidence.bin";

/// Errors from the evidence store.
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// Filesystem operation failed (directory creation or file write).
    #[error("evidence I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A successfully stored evidence file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEvidence {
    /// Generated filename within the evidence directory.
    pub filename: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Stable reference for records, independent of where the directory
    /// lives on disk (`/evidence/{filename}`).
    pub reference: String,
}

/// Local-directory evidence store.
#[derive(Debug, Clone)]
pub struct EvidenceStore {
    dir: PathBuf,
}

impl EvidenceStore {
    /// Open the store, creating the directory if it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, EvidenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory evidence files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write an evidence file in full and return its stored identity.
    ///
    /// The write completes before this returns, so a record holding the
    /// returned reference never points at a partially written file.
    pub fn save(
        &self,
        client_filename: Option<&str>,
        bytes: &[u8],
    ) -> Result<SavedEvidence, EvidenceError> {
        let filename = format!("{}_{}", Uuid::new_v4(), sanitize(client_filename));
        let path = self.dir.join(&filename);
        fs::write(&path, bytes)?;
        let reference = format!("/evidence/{filename}");
        Ok(SavedEvidence {
            filename,
            path,
            reference,
        })
    }

    /// Whether the directory currently accepts writes. Used by the
    /// readiness probe.
    pub fn is_writable(&self) -> bool {
        fs::metadata(&self.dir)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }
}

/// Reduce a client filename to a safe final path component.
fn sanitize(client_filename: Option<&str>) -> String {
    client_filename
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_FILENAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::open(dir.path()).unwrap();
        let saved = store.save(Some("photo.jpg"), b"fake image bytes").unwrap();
        assert_eq!(fs::read(&saved.path).unwrap(), b"fake image bytes");
        assert!(saved.filename.ends_with("_photo.jpg"));
        assert_eq!(saved.reference, format!("/evidence/{}", saved.filename));
    }

    #[test]
    fn identical_client_filenames_get_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::open(dir.path()).unwrap();
        let first = store.save(Some("photo.jpg"), b"one").unwrap();
        let second = store.save(Some("photo.jpg"), b"two").unwrap();
        assert_ne!(first.path, second.path);
        assert_eq!(fs::read(&first.path).unwrap(), b"one");
        assert_eq!(fs::read(&second.path).unwrap(), b"two");
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/evidence");
        let store = EvidenceStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(store.is_writable());
    }

    #[test]
    fn client_path_components_are_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::open(dir.path()).unwrap();
        let saved = store.save(Some("../../etc/passwd"), b"x").unwrap();
        assert!(saved.filename.ends_with("_passwd"));
        assert_eq!(saved.path.parent().unwrap(), dir.path());
    }

    #[test]
    fn missing_filename_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = EvidenceStore::open(dir.path()).unwrap();
        let saved = store.save(None, b"x").unwrap();
        assert!(saved.filename.ends_with("_evidence.bin"));
    }
}
