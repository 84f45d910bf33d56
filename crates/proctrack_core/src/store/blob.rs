//! Blob storage port.
//!
//! # Responsibility
//! - Define the external key/value contract for durable collection storage.
//! - Give storage failures a typed shape callers can surface to the user.
//!
//! # Invariants
//! - `get` performs no write.
//! - A failed `set` leaves the previously stored value readable.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for blob storage operations.
pub type BlobResult<T> = Result<T, BlobStoreError>;

/// Failure raised by a blob storage backend.
#[derive(Debug)]
pub enum BlobStoreError {
    /// Underlying I/O failure (file backends).
    Io(std::io::Error),
    /// The value exceeds the backend's storage quota.
    QuotaExceeded { attempted: usize, limit: usize },
}

impl Display for BlobStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "blob store i/o failure: {err}"),
            Self::QuotaExceeded { attempted, limit } => write!(
                f,
                "blob store quota exceeded: {attempted} bytes attempted, limit {limit}"
            ),
        }
    }
}

impl Error for BlobStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<std::io::Error> for BlobStoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Durable single-key text storage for the serialized collection.
///
/// The record store writes the whole collection document under one fixed
/// key; the backend only has to round-trip arbitrary UTF-8 text of
/// moderate size.
pub trait BlobStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> BlobResult<Option<String>>;

    /// Replaces the value stored under `key` in one atomic write.
    fn set(&mut self, key: &str, value: &str) -> BlobResult<()>;
}
