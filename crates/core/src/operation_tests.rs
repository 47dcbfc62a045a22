// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

#![allow(clippy::unwrap_used)]

use super::*;

fn sample_record() -> Operation {
    Operation {
        id: "op-001".to_string(),
        commercial_name: "Résidence Les Jardins".to_string(),
        company_id: "1111".to_string(),
        address: "123 Avenue des Fleurs, 75001 Paris".to_string(),
        delivery_date: NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
        available_lots: 24,
        reserved_lots: 12,
    }
}

#[test]
fn operation_serializes_camel_case() {
    let json = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(json["commercialName"], "Résidence Les Jardins");
    assert_eq!(json["companyId"], "1111");
    assert_eq!(json["deliveryDate"], "2023-12-15");
    assert_eq!(json["availableLots"], 24);
    assert_eq!(json["reservedLots"], 12);
}

#[test]
fn operation_deserializes_without_reserved_lots() {
    let json = r#"{
        "id": "op-002",
        "commercialName": "Le Clos des Vignes",
        "companyId": "1111",
        "address": "45 Rue du Château, 69002 Lyon",
        "deliveryDate": "2024-03-20",
        "availableLots": 18
    }"#;
    let record: Operation = serde_json::from_str(json).unwrap();
    assert_eq!(record.reserved_lots, 0);
}

#[test]
fn display_from_record_formats_lots() {
    let display = DisplayOperation::from_record(&sample_record());
    assert_eq!(display.lots, "12/24");
    assert!(!display.is_pending);
    assert_eq!(display.title, "Résidence Les Jardins");
}

#[test]
fn display_from_pending_is_flagged_and_keeps_local_id() {
    let pending = PendingWrite {
        local_id: "pending-1700000000000-a1b2c3d4e".to_string(),
        draft: OperationDraft {
            commercial_name: "Les Terrasses".to_string(),
            company_id: "2222".to_string(),
            address: "8 Boulevard Maritime, 06000 Nice".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            available_lots: 32,
        },
        enqueued_at_ms: 1_700_000_000_000,
    };
    let display = DisplayOperation::from_pending(&pending);
    assert!(display.is_pending);
    assert_eq!(display.id, pending.local_id);
    assert_eq!(display.lots, "0/32");
}

#[test]
fn pending_write_round_trips_through_json() {
    let pending = PendingWrite {
        local_id: "pending-1-abc".to_string(),
        draft: OperationDraft {
            commercial_name: "Test".to_string(),
            company_id: "3333".to_string(),
            address: "1 Rue A".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            available_lots: 4,
        },
        enqueued_at_ms: 42,
    };
    let json = serde_json::to_string(&pending).unwrap();
    let back: PendingWrite = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pending);
}
