// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Demonstration dataset shown when the API is unreachable and no cached
//! snapshot exists.

use immo_core::Operation;

/// The built-in demonstration records.
pub fn demonstration_operations() -> Vec<Operation> {
    vec![
        Operation {
            id: "op-001".to_string(),
            commercial_name: "Résidence Les Jardins".to_string(),
            company_id: "comp-001".to_string(),
            address: "123 Avenue des Fleurs, 75001 Paris".to_string(),
            delivery_date: date(2023, 12, 15),
            available_lots: 24,
            reserved_lots: 12,
        },
        Operation {
            id: "op-002".to_string(),
            commercial_name: "Le Clos des Vignes".to_string(),
            company_id: "comp-001".to_string(),
            address: "45 Rue du Château, 69002 Lyon".to_string(),
            delivery_date: date(2024, 3, 20),
            available_lots: 18,
            reserved_lots: 5,
        },
        Operation {
            id: "op-003".to_string(),
            commercial_name: "Les Terrasses de la Mer".to_string(),
            company_id: "comp-002".to_string(),
            address: "8 Boulevard Maritime, 06000 Nice".to_string(),
            delivery_date: date(2024, 6, 10),
            available_lots: 32,
            reserved_lots: 0,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    // The demo dates are compile-time constants and always valid.
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
