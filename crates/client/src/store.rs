// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! SQLite-backed local persistence.
//!
//! Two tables live here: `pending_writes` is the durable queue of drafts
//! accepted while offline, and `operations` is the read cache holding the
//! last server snapshot for offline browsing.

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use rusqlite::{params, Connection};
use std::path::Path;

use immo_core::{Operation, OperationDraft, PendingWrite};

use crate::error::StoreError;

/// SQL schema for the client-side store.
pub const SCHEMA: &str = r#"
-- Durable queue of writes accepted while offline
CREATE TABLE IF NOT EXISTS pending_writes (
    local_id TEXT PRIMARY KEY,
    payload TEXT NOT NULL,
    enqueued_at_ms INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pending_enqueued
    ON pending_writes(enqueued_at_ms);

-- Read cache: last known server snapshot
CREATE TABLE IF NOT EXISTS operations (
    id TEXT PRIMARY KEY,
    commercial_name TEXT NOT NULL,
    company_id TEXT NOT NULL,
    address TEXT NOT NULL,
    delivery_date TEXT NOT NULL,
    available_lots INTEGER NOT NULL,
    reserved_lots INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_operations_delivery
    ON operations(delivery_date);
"#;

/// Local store for the write queue and the read cache.
pub struct OfflineStore {
    conn: Connection,
}

impl OfflineStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(OfflineStore { conn })
    }

    /// Open an in-memory store, for tests and ephemeral sessions.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(OfflineStore { conn })
    }

    /// Queue a draft for later replay. Returns the stored record with its
    /// generated local id.
    pub fn enqueue(&self, draft: &OperationDraft) -> Result<PendingWrite, StoreError> {
        let enqueued_at_ms = Utc::now().timestamp_millis();
        let record = PendingWrite {
            local_id: local_id(enqueued_at_ms),
            draft: draft.clone(),
            enqueued_at_ms,
        };

        let payload = serde_json::to_string(&record.draft)?;
        self.conn.execute(
            "INSERT INTO pending_writes (local_id, payload, enqueued_at_ms)
             VALUES (?1, ?2, ?3)",
            params![record.local_id, payload, record.enqueued_at_ms],
        )?;

        tracing::debug!(local_id = %record.local_id, "queued offline write");
        Ok(record)
    }

    /// All queued writes, oldest first.
    pub fn list_pending(&self) -> Result<Vec<PendingWrite>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT local_id, payload, enqueued_at_ms FROM pending_writes
             ORDER BY enqueued_at_ms ASC, local_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;

        let mut pending = Vec::new();
        for row in rows {
            let (local_id, payload, enqueued_at_ms) = row?;
            let draft: OperationDraft = serde_json::from_str(&payload).map_err(|e| {
                StoreError::CorruptedData(format!("pending write {local_id}: {e}"))
            })?;
            pending.push(PendingWrite {
                local_id,
                draft,
                enqueued_at_ms,
            });
        }
        Ok(pending)
    }

    /// Remove a queued write after a successful replay.
    ///
    /// Removing an id that is already gone is a no-op.
    pub fn remove(&self, local_id: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "DELETE FROM pending_writes WHERE local_id = ?1",
            params![local_id],
        )?;
        Ok(())
    }

    /// Number of queued writes.
    pub fn pending_count(&self) -> Result<u64, StoreError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM pending_writes", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Replace the read cache with a fresh server snapshot.
    pub fn cache_snapshot(&mut self, operations: &[Operation]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM operations", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO operations
                 (id, commercial_name, company_id, address, delivery_date,
                  available_lots, reserved_lots)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for op in operations {
                stmt.execute(params![
                    op.id,
                    op.commercial_name,
                    op.company_id,
                    op.address,
                    op.delivery_date.to_string(),
                    op.available_lots,
                    op.reserved_lots,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// The cached server snapshot, delivery date ascending.
    pub fn cached_operations(&self) -> Result<Vec<Operation>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, commercial_name, company_id, address, delivery_date,
                    available_lots, reserved_lots
             FROM operations ORDER BY delivery_date ASC, id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, u32>(5)?,
                row.get::<_, u32>(6)?,
            ))
        })?;

        let mut operations = Vec::new();
        for row in rows {
            let (id, commercial_name, company_id, address, delivery_date, available, reserved) =
                row?;
            let delivery_date = delivery_date.parse().map_err(|e| {
                StoreError::CorruptedData(format!("cached operation {id}: bad date: {e}"))
            })?;
            operations.push(Operation {
                id,
                commercial_name,
                company_id,
                address,
                delivery_date,
                available_lots: available,
                reserved_lots: reserved,
            });
        }
        Ok(operations)
    }
}

/// Locally unique id for a queued write: `pending-<millis>-<9 alnum>`.
fn local_id(timestamp_ms: i64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("pending-{timestamp_ms}-{suffix}")
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
