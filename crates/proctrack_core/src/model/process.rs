//! Process record domain model.
//!
//! # Responsibility
//! - Define the canonical process entry tracked by the core.
//! - Provide validated construction and in-place edit helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `name` is non-empty after trimming for every constructed record.
//! - `created_at` is set once at creation and preserved by every edit.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every tracked process.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProcessId = Uuid;

/// Lifecycle state of a tracked process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Registered but not started.
    #[default]
    Pending,
    /// Work is under way.
    InProgress,
    /// Finished successfully.
    Completed,
    /// Stuck on an external dependency.
    Blocked,
}

impl ProcessStatus {
    /// Wire/display name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }

    /// Parses a wire/display name back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// Urgency level of a tracked process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Validation failures raised at the record construction boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
}

impl Display for ProcessValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "process name must not be empty"),
        }
    }
}

impl Error for ProcessValidationError {}

/// User-supplied fields for creating or editing a process.
///
/// All identity and bookkeeping fields (`id`, `created_at`, `updated_at`)
/// are owned by the record itself; a draft can never carry them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessDraft {
    /// Required display name. Validated as non-empty after trimming;
    /// the original spacing is stored as given.
    pub name: String,
    pub description: String,
    pub status: ProcessStatus,
    pub priority: Priority,
    pub assignee: String,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl ProcessDraft {
    /// Creates a draft with the given name and default remaining fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks draft invariants without constructing a record.
    ///
    /// # Errors
    /// - `EmptyName` when `name` trims to the empty string.
    pub fn validate(&self) -> Result<(), ProcessValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProcessValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Canonical record for one tracked process.
///
/// Serialized field names are camelCase to match the persisted document
/// shape consumed by existing presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    /// Stable global ID used for edit and delete targeting.
    pub id: ProcessId,
    pub name: String,
    /// Empty string when the user supplied no description.
    #[serde(default)]
    pub description: String,
    pub status: ProcessStatus,
    pub priority: Priority,
    /// Empty string when unassigned.
    #[serde(default)]
    pub assignee: String,
    /// ISO calendar date, no time component.
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// Set once at creation, never changed thereafter.
    pub created_at: DateTime<Utc>,
    /// Refreshed on create and on every edit.
    pub updated_at: DateTime<Utc>,
}

impl ProcessRecord {
    /// Constructs a new record from a validated draft.
    ///
    /// Assigns a fresh v4 `id` and sets `created_at == updated_at` to the
    /// current time.
    ///
    /// # Errors
    /// - Propagates draft validation failures; nothing is constructed.
    pub fn from_draft(draft: &ProcessDraft) -> Result<Self, ProcessValidationError> {
        draft.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee.clone(),
            start_date: draft.start_date,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces all draft-carried fields in place.
    ///
    /// # Invariants
    /// - `id` and `created_at` are untouched.
    /// - `updated_at` is refreshed and never moves backwards, even when the
    ///   wall clock does.
    /// - On validation failure the record is left unchanged.
    pub fn apply_draft(&mut self, draft: &ProcessDraft) -> Result<(), ProcessValidationError> {
        draft.validate()?;
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.status = draft.status;
        self.priority = draft.priority;
        self.assignee = draft.assignee.clone();
        self.start_date = draft.start_date;
        self.due_date = draft.due_date;
        self.updated_at = self.updated_at.max(Utc::now());
        Ok(())
    }
}
