use proctrack_core::{
    BlobStore, BlobStoreError, FileBlobStore, MemoryBlobStore, ProcessDraft, ProcessStore,
};
use tempfile::tempdir;

#[test]
fn memory_store_round_trips_text() {
    let mut blob = MemoryBlobStore::new();
    assert_eq!(blob.get("processes").unwrap(), None);

    blob.set("processes", "[]").unwrap();
    assert_eq!(blob.get("processes").unwrap().as_deref(), Some("[]"));

    blob.set("processes", r#"[{"name":"próximo"}]"#).unwrap();
    assert_eq!(
        blob.get("processes").unwrap().as_deref(),
        Some(r#"[{"name":"próximo"}]"#)
    );
}

#[test]
fn memory_store_quota_failure_keeps_previous_value() {
    let mut blob = MemoryBlobStore::with_quota(4);
    blob.set("processes", "[]").unwrap();

    let err = blob.set("processes", "[1,2,3,4]").unwrap_err();
    assert!(matches!(
        err,
        BlobStoreError::QuotaExceeded { attempted: 9, limit: 4 }
    ));
    assert_eq!(blob.get("processes").unwrap().as_deref(), Some("[]"));
}

#[test]
fn file_store_round_trips_and_reads_missing_key_as_none() {
    let dir = tempdir().unwrap();
    let mut blob = FileBlobStore::open(dir.path()).unwrap();

    assert_eq!(blob.get("processes").unwrap(), None);
    blob.set("processes", r#"[{"name":"Audit"}]"#).unwrap();
    assert_eq!(
        blob.get("processes").unwrap().as_deref(),
        Some(r#"[{"name":"Audit"}]"#)
    );

    blob.set("processes", "[]").unwrap();
    assert_eq!(blob.get("processes").unwrap().as_deref(), Some("[]"));
}

#[test]
fn file_store_state_survives_reopen() {
    let dir = tempdir().unwrap();

    let created = {
        let blob = FileBlobStore::open(dir.path()).unwrap();
        let mut store = ProcessStore::new(blob);
        store.create(&ProcessDraft::new("durable entry")).unwrap()
    };

    let blob = FileBlobStore::open(dir.path()).unwrap();
    let mut store = ProcessStore::new(blob);
    assert_eq!(store.load().unwrap(), 1);
    assert_eq!(store.records(), &[created]);
}
