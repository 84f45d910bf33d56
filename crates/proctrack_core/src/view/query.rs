//! Filter, search and summary statistics over the record collection.
//!
//! # Responsibility
//! - Derive the display-ready subset from a borrowed collection slice.
//! - Compute per-status counts over the full, unfiltered collection.
//!
//! # Invariants
//! - Both operations are pure; recomputing on every query is safe.
//! - The status stage runs before the search stage.
//! - Surviving records keep their collection order.

use crate::model::process::{ProcessRecord, ProcessStatus};

/// Status predicate for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every record regardless of status.
    #[default]
    All,
    /// Keep only records in exactly this status.
    Only(ProcessStatus),
}

impl StatusFilter {
    /// Parses presentation-layer filter input (`"all"` or a status name).
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        ProcessStatus::parse(value).map(Self::Only)
    }

    fn matches(self, status: ProcessStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

/// Options for one list-view computation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against name, description and
    /// assignee. Empty matches everything.
    pub search: String,
    pub status: StatusFilter,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }
}

/// Computes the filtered and searched subset of `records`.
///
/// Status filter first, then search; a record survives the search stage
/// when the lowercased term is a substring of its name, description or
/// assignee. Order is the input order.
pub fn view<'a>(records: &'a [ProcessRecord], query: &ViewQuery) -> Vec<&'a ProcessRecord> {
    let needle = query.search.to_lowercase();
    records
        .iter()
        .filter(|record| query.status.matches(record.status))
        .filter(|record| matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &ProcessRecord, needle: &str) -> bool {
    // `contains` on an empty needle is true, which is exactly the
    // empty-search-matches-everything contract.
    record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.assignee.to_lowercase().contains(needle)
}

/// Aggregate counts over the full, unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub blocked: usize,
}

/// Counts records per status in one pass.
pub fn stats(records: &[ProcessRecord]) -> ViewStats {
    let mut stats = ViewStats {
        total: records.len(),
        ..ViewStats::default()
    };
    for record in records {
        match record.status {
            ProcessStatus::Pending => stats.pending += 1,
            ProcessStatus::InProgress => stats.in_progress += 1,
            ProcessStatus::Completed => stats.completed += 1,
            ProcessStatus::Blocked => stats.blocked += 1,
        }
    }
    stats
}
