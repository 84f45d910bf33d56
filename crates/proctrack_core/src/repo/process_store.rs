//! Process record store over a blob storage backend.
//!
//! # Responsibility
//! - Own the canonical in-memory collection.
//! - Provide create/update/delete/load/persist entry points for callers.
//! - Keep the blob store a mirror of memory state.
//!
//! # Invariants
//! - Validation runs before any mutation; a failed operation leaves the
//!   collection unchanged.
//! - Insertion order is preserved: append on create, in-place replace on
//!   edit.
//! - A failed persist never rolls back the in-memory mutation; memory and
//!   the durable mirror may diverge until the next successful persist.

use crate::model::process::{ProcessDraft, ProcessId, ProcessRecord, ProcessValidationError};
use crate::store::blob::{BlobStore, BlobStoreError};
use crate::store::codec::{decode_collection, encode_collection, CodecError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed blob store key holding the whole collection document.
pub const COLLECTION_KEY: &str = "processes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store error taxonomy.
///
/// No variant is fatal: every failure returns control to the caller with
/// enough information to inform the user and retry.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected at the construction boundary; nothing was mutated.
    Validation(ProcessValidationError),
    /// Update target does not exist; nothing was mutated.
    NotFound(ProcessId),
    /// Durable write failed; the in-memory mutation is retained.
    Storage(BlobStoreError),
    /// Persisted state could not be decoded; collection was reset to empty.
    CorruptState(CodecError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "process not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::CorruptState(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
            Self::CorruptState(err) => Some(err),
        }
    }
}

impl From<ProcessValidationError> for StoreError {
    fn from(value: ProcessValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BlobStoreError> for StoreError {
    fn from(value: BlobStoreError) -> Self {
        Self::Storage(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::CorruptState(value)
    }
}

/// The single owner of the process collection.
///
/// Callers hold read-only views through [`records`](Self::records) and
/// mutate exclusively through the operations below. Single-threaded by
/// design: every operation runs to completion before the next event.
pub struct ProcessStore<B: BlobStore> {
    blob: B,
    key: String,
    records: Vec<ProcessRecord>,
}

impl<B: BlobStore> ProcessStore<B> {
    /// Creates an empty store mirrored into `blob` under [`COLLECTION_KEY`].
    pub fn new(blob: B) -> Self {
        Self::with_key(blob, COLLECTION_KEY)
    }

    /// Creates an empty store mirrored under a caller-chosen key.
    pub fn with_key(blob: B, key: impl Into<String>) -> Self {
        Self {
            blob,
            key: key.into(),
            records: Vec::new(),
        }
    }

    /// Loads the collection from the blob store, replacing memory state.
    ///
    /// A missing entry loads as an empty collection. Undecodable state
    /// resets the collection to empty and reports `CorruptState` so the
    /// caller can inform the user; it is never silently swallowed.
    ///
    /// Returns the number of records loaded.
    pub fn load(&mut self) -> StoreResult<usize> {
        let raw = match self.blob.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.records.clear();
                info!("event=store_load module=repo status=ok count=0 source=empty");
                return Ok(0);
            }
            Err(err) => {
                error!("event=store_load module=repo status=error error={err}");
                return Err(err.into());
            }
        };

        match decode_collection(&raw) {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                info!("event=store_load module=repo status=ok count={count}");
                Ok(count)
            }
            Err(err) => {
                self.records.clear();
                warn!("event=store_load module=repo status=corrupt error={err}");
                Err(err.into())
            }
        }
    }

    /// Creates a record from `draft`, appends it and persists.
    ///
    /// # Errors
    /// - `Validation` before any mutation.
    /// - `Storage` after the append; the new record stays in memory.
    pub fn create(&mut self, draft: &ProcessDraft) -> StoreResult<ProcessRecord> {
        let record = ProcessRecord::from_draft(draft)?;
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replaces the record with `id` using `draft` and persists.
    ///
    /// The record keeps its position in the collection and its original
    /// `created_at`; only `updated_at` advances.
    ///
    /// # Errors
    /// - `NotFound` / `Validation` before any mutation.
    /// - `Storage` after the replace; the edit stays in memory.
    pub fn update(&mut self, id: ProcessId, draft: &ProcessDraft) -> StoreResult<ProcessRecord> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.records[position].apply_draft(draft)?;
        let record = self.records[position].clone();
        self.persist()?;
        Ok(record)
    }

    /// Removes the record with `id`, if present, and persists.
    ///
    /// An absent id is a no-op, not an error; the unchanged collection is
    /// still written. Confirmation is the caller's responsibility.
    pub fn delete(&mut self, id: ProcessId) -> StoreResult<()> {
        self.records.retain(|record| record.id != id);
        self.persist()
    }

    /// Writes the full collection to the blob store as one atomic write.
    ///
    /// Safe to call again after a `Storage` failure: memory state is the
    /// source of truth and is re-encoded on every attempt.
    pub fn persist(&mut self) -> StoreResult<()> {
        let raw = encode_collection(&self.records)?;
        if let Err(err) = self.blob.set(&self.key, &raw) {
            error!(
                "event=store_persist module=repo status=error count={} error={err}",
                self.records.len()
            );
            return Err(err.into());
        }
        debug!(
            "event=store_persist module=repo status=ok count={}",
            self.records.len()
        );
        Ok(())
    }

    /// Read-only view of the collection in insertion order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Looks up one record by id, for edit-form prefill and similar flows.
    pub fn get(&self, id: ProcessId) -> Option<&ProcessRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mutable access to the blob store backend.
    ///
    /// Recovery hook for callers that need to reconfigure the backend
    /// before retrying [`persist`](Self::persist).
    pub fn blob_mut(&mut self) -> &mut B {
        &mut self.blob
    }

    /// Consumes the store, returning the blob store backend.
    ///
    /// Used when handing the same durable state to a fresh store instance.
    pub fn into_blob(self) -> B {
        self.blob
    }
}
