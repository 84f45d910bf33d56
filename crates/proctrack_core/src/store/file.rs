//! File-backed blob storage backend.
//!
//! # Responsibility
//! - Persist keyed blobs as files under one root directory.
//! - Keep each write atomic so a crash never leaves a half-written value.
//!
//! # Invariants
//! - One key maps to exactly one file, `<key>.json` under the root.
//! - Writes go to a temp file first and are renamed into place.

use super::blob::{BlobResult, BlobStore};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Blob store writing one file per key under a root directory.
#[derive(Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Side effects
    /// - Emits `blob_open` logging events with status.
    pub fn open(root: impl AsRef<Path>) -> BlobResult<Self> {
        let root = root.as_ref().to_path_buf();
        if let Err(err) = fs::create_dir_all(&root) {
            error!(
                "event=blob_open module=store status=error root={} error={}",
                root.display(),
                err
            );
            return Err(err.into());
        }
        info!(
            "event=blob_open module=store status=ok root={}",
            root.display()
        );
        Ok(Self { root })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        let target = self.blob_path(key);
        let staged = self.root.join(format!("{key}.json.tmp"));
        fs::write(&staged, value)?;
        if let Err(err) = fs::rename(&staged, &target) {
            // Leave the previous value untouched; drop only the staging file.
            let _ = fs::remove_file(&staged);
            error!(
                "event=blob_write module=store status=error key={key} bytes={} error={}",
                value.len(),
                err
            );
            return Err(err.into());
        }
        Ok(())
    }
}
