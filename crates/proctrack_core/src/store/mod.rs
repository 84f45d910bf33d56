//! Persistence boundary: blob storage port, backends and collection codec.
//!
//! # Responsibility
//! - Define the single-key blob storage contract the record store mirrors
//!   the collection into.
//! - Provide in-memory and file-backed implementations.
//! - Keep serialization details inside this boundary.
//!
//! # Invariants
//! - A `set` either replaces the keyed value completely or fails leaving
//!   the previously stored value intact.
//! - Backends store opaque UTF-8 text; they never inspect record fields.

pub mod blob;
pub mod codec;
pub mod file;
pub mod memory;
