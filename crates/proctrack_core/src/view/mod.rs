//! Display-oriented queries derived from the collection.
//!
//! # Responsibility
//! - Compute the filtered/searched subset and aggregate counts on demand.
//!
//! # Invariants
//! - Queries never mutate the collection.
//! - Result order follows collection order; nothing is re-sorted.

pub mod query;
