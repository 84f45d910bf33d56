use chrono::{DateTime, NaiveDate, Utc};
use proctrack_core::{
    Priority, ProcessDraft, ProcessRecord, ProcessStatus, ProcessValidationError,
};
use uuid::Uuid;

#[test]
fn draft_new_sets_defaults() {
    let draft = ProcessDraft::new("quarterly audit");

    assert_eq!(draft.name, "quarterly audit");
    assert_eq!(draft.description, "");
    assert_eq!(draft.status, ProcessStatus::Pending);
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.assignee, "");
    assert_eq!(draft.start_date, None);
    assert_eq!(draft.due_date, None);
}

#[test]
fn from_draft_assigns_id_and_equal_timestamps() {
    let record = ProcessRecord::from_draft(&ProcessDraft::new("deploy portal")).unwrap();

    assert!(!record.id.is_nil());
    assert_eq!(record.name, "deploy portal");
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn from_draft_assigns_unique_ids() {
    let draft = ProcessDraft::new("same name twice");
    let first = ProcessRecord::from_draft(&draft).unwrap();
    let second = ProcessRecord::from_draft(&draft).unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn from_draft_rejects_empty_and_whitespace_names() {
    let err = ProcessRecord::from_draft(&ProcessDraft::new("")).unwrap_err();
    assert_eq!(err, ProcessValidationError::EmptyName);

    let err = ProcessRecord::from_draft(&ProcessDraft::new("   ")).unwrap_err();
    assert_eq!(err, ProcessValidationError::EmptyName);
}

#[test]
fn from_draft_keeps_original_name_spacing() {
    let record = ProcessRecord::from_draft(&ProcessDraft::new("  padded name ")).unwrap();
    assert_eq!(record.name, "  padded name ");
}

#[test]
fn apply_draft_preserves_identity_and_created_at() {
    let mut record = ProcessRecord::from_draft(&ProcessDraft::new("initial")).unwrap();
    let original_id = record.id;
    let original_created_at = record.created_at;

    let mut edit = ProcessDraft::new("revised");
    edit.status = ProcessStatus::InProgress;
    edit.priority = Priority::High;
    edit.assignee = "Ana".to_string();
    record.apply_draft(&edit).unwrap();

    assert_eq!(record.id, original_id);
    assert_eq!(record.created_at, original_created_at);
    assert!(record.updated_at >= original_created_at);
    assert_eq!(record.name, "revised");
    assert_eq!(record.status, ProcessStatus::InProgress);
    assert_eq!(record.priority, Priority::High);
    assert_eq!(record.assignee, "Ana");
}

#[test]
fn apply_draft_never_moves_updated_at_backwards() {
    let mut record = ProcessRecord::from_draft(&ProcessDraft::new("clock skew")).unwrap();
    // Simulate a record last edited while the wall clock ran ahead.
    let future = record.updated_at + chrono::Duration::hours(1);
    record.updated_at = future;

    record.apply_draft(&ProcessDraft::new("edited again")).unwrap();
    assert!(record.updated_at >= future);
}

#[test]
fn apply_draft_rejects_invalid_name_without_mutating() {
    let mut record = ProcessRecord::from_draft(&ProcessDraft::new("keep me")).unwrap();
    let before = record.clone();

    let err = record.apply_draft(&ProcessDraft::new("   ")).unwrap_err();
    assert_eq!(err, ProcessValidationError::EmptyName);
    assert_eq!(record, before);
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created_at: DateTime<Utc> = "2026-02-10T09:00:00Z".parse().unwrap();
    let updated_at: DateTime<Utc> = "2026-02-11T10:30:00Z".parse().unwrap();
    let record = ProcessRecord {
        id,
        name: "Migrate billing".to_string(),
        description: "Move invoices to the new pipeline".to_string(),
        status: ProcessStatus::InProgress,
        priority: Priority::High,
        assignee: "Ben".to_string(),
        start_date: Some(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()),
        due_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
        created_at,
        updated_at,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Migrate billing");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["assignee"], "Ben");
    assert_eq!(json["startDate"], "2026-02-10");
    assert_eq!(json["dueDate"], "2026-03-01");
    assert!(json["createdAt"].as_str().unwrap().starts_with("2026-02-10T09:00:00"));
    assert!(json["updatedAt"].as_str().unwrap().starts_with("2026-02-11T10:30:00"));

    let decoded: ProcessRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn status_round_trips_through_parse() {
    for status in [
        ProcessStatus::Pending,
        ProcessStatus::InProgress,
        ProcessStatus::Completed,
        ProcessStatus::Blocked,
    ] {
        assert_eq!(ProcessStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ProcessStatus::parse("done"), None);
}
