//! Record store: the single owner of the canonical collection.
//!
//! # Responsibility
//! - Mediate every mutation of the process collection.
//! - Mirror the collection into the injected blob storage backend.
//!
//! # Invariants
//! - The collection is mutated only through record store operations.
//! - Every mutating operation performs exactly one persist.

pub mod process_store;
