//! Domain model for tracked processes.
//!
//! # Responsibility
//! - Define the canonical record shape used by core business logic.
//! - Enforce field invariants through validated construction.
//!
//! # Invariants
//! - Every record is identified by a stable `ProcessId`.
//! - A record never enters the collection with an empty name.

pub mod process;
