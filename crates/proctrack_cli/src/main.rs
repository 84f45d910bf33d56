//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `proctrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use proctrack_core::{
    stats, view, MemoryBlobStore, ProcessDraft, ProcessStore, StatusFilter, ViewQuery,
};

fn main() {
    println!("proctrack_core version={}", proctrack_core::core_version());

    // One create -> view -> stats round trip against an in-memory store.
    let mut store = ProcessStore::new(MemoryBlobStore::new());
    match store.create(&ProcessDraft::new("smoke check")) {
        Ok(record) => {
            let query = ViewQuery::new("smoke", StatusFilter::All);
            let visible = view(store.records(), &query);
            let counts = stats(store.records());
            println!(
                "proctrack_core smoke created={} visible={} pending={}",
                record.name,
                visible.len(),
                counts.pending
            );
        }
        Err(err) => {
            eprintln!("proctrack_core smoke failed: {err}");
            std::process::exit(1);
        }
    }
}
