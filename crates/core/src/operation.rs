// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Core domain types for property-development operations.
//!
//! This module contains the fundamental data types: [`Operation`] (the
//! server-side record), [`OperationDraft`] (the create payload),
//! [`PendingWrite`] (a draft parked in the offline queue), and
//! [`DisplayOperation`] (the presentation projection).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length of an operation's commercial name.
pub const MAX_COMMERCIAL_NAME_LEN: usize = 24;

/// A property-development operation as persisted by the server.
///
/// Records are immutable once created; there are no update or delete
/// operations in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Globally unique identifier assigned by the server.
    pub id: String,
    /// Commercial name of the development (at most 24 characters).
    pub commercial_name: String,
    /// Identifier of the company carrying the development.
    pub company_id: String,
    /// Postal address of the development.
    pub address: String,
    /// Planned delivery date.
    pub delivery_date: NaiveDate,
    /// Number of lots available for sale.
    pub available_lots: u32,
    /// Number of lots already reserved.
    #[serde(default)]
    pub reserved_lots: u32,
}

/// Form payload for creating an operation.
///
/// This is what the user submits; the server fills in the id and the
/// reserved lot count on successful persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDraft {
    pub commercial_name: String,
    pub company_id: String,
    pub address: String,
    pub delivery_date: NaiveDate,
    pub available_lots: u32,
}

/// A draft accepted locally while offline, waiting to be replayed.
///
/// Owned exclusively by the offline store; it exists only until the item
/// is successfully synced, at which point it is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWrite {
    /// Locally generated identifier, distinct from any server id.
    pub local_id: String,
    /// The original form payload.
    pub draft: OperationDraft,
    /// Enqueue time in milliseconds since the Unix epoch; replay order.
    pub enqueued_at_ms: i64,
}

/// Presentation projection of an [`Operation`] or a [`PendingWrite`].
///
/// Derived, never persisted; recomputed on every read. The `is_pending`
/// flag lets the list view distinguish unsynced entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOperation {
    pub id: String,
    pub title: String,
    pub address: String,
    pub date: NaiveDate,
    /// Lot occupancy rendered as `reserved/available`.
    pub lots: String,
    pub company_id: String,
    pub is_pending: bool,
}

impl DisplayOperation {
    /// Project a server-confirmed record.
    pub fn from_record(record: &Operation) -> Self {
        DisplayOperation {
            id: record.id.clone(),
            title: record.commercial_name.clone(),
            address: record.address.clone(),
            date: record.delivery_date,
            lots: format!("{}/{}", record.reserved_lots, record.available_lots),
            company_id: record.company_id.clone(),
            is_pending: false,
        }
    }

    /// Project a queued draft as an optimistic local record.
    ///
    /// Uses the local id in place of a server id; no lots are reserved yet.
    pub fn from_pending(pending: &PendingWrite) -> Self {
        DisplayOperation {
            id: pending.local_id.clone(),
            title: pending.draft.commercial_name.clone(),
            address: pending.draft.address.clone(),
            date: pending.draft.delivery_date,
            lots: format!("0/{}", pending.draft.available_lots),
            company_id: pending.draft.company_id.clone(),
            is_pending: true,
        }
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
