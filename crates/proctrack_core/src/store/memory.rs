//! In-memory blob storage backend.
//!
//! # Responsibility
//! - Back the record store without touching the filesystem.
//! - Model quota-limited storage so persist-failure paths are exercisable.

use super::blob::{BlobResult, BlobStore, BlobStoreError};
use std::collections::HashMap;

/// HashMap-backed blob store.
///
/// With a quota configured, any `set` whose value exceeds the byte limit
/// fails with `QuotaExceeded` and leaves the previous value intact.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryBlobStore {
    /// Creates an empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects values larger than `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Lifts the quota so a previously failing persist can be retried.
    pub fn clear_quota(&mut self) {
        self.quota_bytes = None;
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(BlobStoreError::QuotaExceeded {
                    attempted: value.len(),
                    limit,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
