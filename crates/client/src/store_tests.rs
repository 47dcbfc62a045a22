// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;

fn draft(name: &str) -> OperationDraft {
    OperationDraft {
        commercial_name: name.to_string(),
        company_id: "1111".to_string(),
        address: "2 Place du Marché, 44000 Nantes".to_string(),
        delivery_date: NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
        available_lots: 12,
    }
}

fn operation(id: &str, date: &str) -> Operation {
    Operation {
        id: id.to_string(),
        commercial_name: format!("Résidence {id}"),
        company_id: "2222".to_string(),
        address: "1 Rue Haute, 59000 Lille".to_string(),
        delivery_date: date.parse().unwrap(),
        available_lots: 10,
        reserved_lots: 3,
    }
}

#[test]
fn enqueue_assigns_pending_id_and_increments_count() {
    let store = OfflineStore::open_in_memory().unwrap();
    assert_eq!(store.pending_count().unwrap(), 0);

    let record = store.enqueue(&draft("Les Lilas")).unwrap();
    assert!(record.local_id.starts_with("pending-"));
    assert_eq!(record.draft.commercial_name, "Les Lilas");
    assert_eq!(store.pending_count().unwrap(), 1);
}

#[test]
fn pending_ids_are_unique() {
    let store = OfflineStore::open_in_memory().unwrap();
    let a = store.enqueue(&draft("A")).unwrap();
    let b = store.enqueue(&draft("B")).unwrap();
    assert_ne!(a.local_id, b.local_id);
}

#[test]
fn list_pending_returns_fifo_order() {
    let store = OfflineStore::open_in_memory().unwrap();
    let first = store.enqueue(&draft("Premier")).unwrap();
    let second = store.enqueue(&draft("Second")).unwrap();

    let pending = store.list_pending().unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].local_id, first.local_id);
    assert_eq!(pending[1].local_id, second.local_id);
    assert_eq!(pending[0].draft.commercial_name, "Premier");
}

#[test]
fn remove_is_idempotent() {
    let store = OfflineStore::open_in_memory().unwrap();
    let record = store.enqueue(&draft("Unique")).unwrap();

    store.remove(&record.local_id).unwrap();
    assert_eq!(store.pending_count().unwrap(), 0);

    // A second removal of the same id must not fail.
    store.remove(&record.local_id).unwrap();
    assert_eq!(store.pending_count().unwrap(), 0);
}

#[test]
fn queue_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("immo.db");

    let local_id = {
        let store = OfflineStore::open(&path).unwrap();
        store.enqueue(&draft("Persistant")).unwrap().local_id
    };

    let store = OfflineStore::open(&path).unwrap();
    let pending = store.list_pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].local_id, local_id);
}

#[test]
fn cache_snapshot_replaces_previous_contents() {
    let mut store = OfflineStore::open_in_memory().unwrap();
    store
        .cache_snapshot(&[operation("op-1", "2026-01-10"), operation("op-2", "2026-02-10")])
        .unwrap();
    assert_eq!(store.cached_operations().unwrap().len(), 2);

    store.cache_snapshot(&[operation("op-3", "2026-03-10")]).unwrap();
    let cached = store.cached_operations().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, "op-3");
    assert_eq!(cached[0].reserved_lots, 3);
}

#[test]
fn cached_operations_sorted_by_delivery_date() {
    let mut store = OfflineStore::open_in_memory().unwrap();
    store
        .cache_snapshot(&[operation("op-late", "2027-06-01"), operation("op-early", "2026-01-01")])
        .unwrap();

    let cached = store.cached_operations().unwrap();
    assert_eq!(cached[0].id, "op-early");
    assert_eq!(cached[1].id, "op-late");
}
