//! Core domain logic for ProcTrack.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::process::{
    Priority, ProcessDraft, ProcessId, ProcessRecord, ProcessStatus, ProcessValidationError,
};
pub use repo::process_store::{ProcessStore, StoreError, StoreResult, COLLECTION_KEY};
pub use store::blob::{BlobResult, BlobStore, BlobStoreError};
pub use store::codec::{decode_collection, encode_collection, CodecError, CodecResult};
pub use store::file::FileBlobStore;
pub use store::memory::MemoryBlobStore;
pub use view::query::{stats, view, StatusFilter, ViewQuery, ViewStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
