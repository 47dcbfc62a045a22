// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! SQLite-backed repository for companies and operations.

use chrono::{Duration, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use immo_core::Operation;

use crate::error::Result;

/// Duplicate names are rejected within this window around the delivery
/// date, in days (ten years either side).
pub const DUPLICATE_WINDOW_DAYS: i64 = 3650;

/// SQL schema for the server database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS operations (
    id TEXT PRIMARY KEY,
    client_ref TEXT UNIQUE,
    commercial_name TEXT NOT NULL,
    company_id TEXT NOT NULL,
    address TEXT NOT NULL,
    delivery_date TEXT NOT NULL,
    available_lots INTEGER NOT NULL,
    reserved_lots INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    FOREIGN KEY (company_id) REFERENCES companies(id)
);

CREATE INDEX IF NOT EXISTS idx_operations_name ON operations(commercial_name);
CREATE INDEX IF NOT EXISTS idx_operations_delivery ON operations(delivery_date);
"#;

/// Companies present in every fresh database.
const SEED_COMPANIES: &[(&str, &str)] = &[
    ("1111", "Societe A"),
    ("2222", "Societe B"),
    ("3333", "Societe C"),
];

/// Data access for companies and operations.
pub struct Repository {
    conn: Connection,
}

impl Repository {
    /// Open (or create) the repository at the given path.
    pub fn open(path: &Path) -> Result<Self> {
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
        let repo = Repository { conn };
        repo.init()?;
        Ok(repo)
    }

    /// Open an in-memory repository, for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let repo = Repository { conn };
        repo.init()?;
        Ok(repo)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        for (id, name) in SEED_COMPANIES {
            self.conn.execute(
                "INSERT OR IGNORE INTO companies (id, name) VALUES (?1, ?2)",
                params![id, name],
            )?;
        }
        Ok(())
    }

    /// Whether a company with this id exists.
    pub fn company_exists(&self, company_id: &str) -> Result<bool> {
        let found: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM companies WHERE id = ?1",
            params![company_id],
            |row| row.get(0),
        )?;
        Ok(found)
    }

    /// Whether an operation with the same name (case-insensitive) exists
    /// with a delivery date within ten years of the given one, inclusive.
    pub fn name_exists_in_window(&self, commercial_name: &str, delivery_date: NaiveDate) -> Result<bool> {
        let from = delivery_date - Duration::days(DUPLICATE_WINDOW_DAYS);
        let to = delivery_date + Duration::days(DUPLICATE_WINDOW_DAYS);
        let found: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM operations
             WHERE LOWER(commercial_name) = LOWER(?1)
               AND delivery_date >= ?2 AND delivery_date <= ?3",
            params![commercial_name, from.to_string(), to.to_string()],
            |row| row.get(0),
        )?;
        Ok(found)
    }

    /// Look up an operation previously created under this client reference.
    pub fn find_by_client_ref(&self, client_ref: &str) -> Result<Option<Operation>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, commercial_name, company_id, address, delivery_date,
                        available_lots, reserved_lots
                 FROM operations WHERE client_ref = ?1",
                params![client_ref],
                map_operation_row,
            )
            .optional()?;
        match row {
            Some(raw) => Ok(Some(operation_from_row(raw)?)),
            None => Ok(None),
        }
    }

    /// Persist a new operation.
    pub fn save(&self, operation: &Operation, client_ref: Option<&str>) -> Result<()> {
        self.conn.execute(
            "INSERT INTO operations
             (id, client_ref, commercial_name, company_id, address, delivery_date,
              available_lots, reserved_lots, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                operation.id,
                client_ref,
                operation.commercial_name,
                operation.company_id,
                operation.address,
                operation.delivery_date.to_string(),
                operation.available_lots,
                operation.reserved_lots,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// All operations, oldest first.
    pub fn list_all(&self) -> Result<Vec<Operation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, commercial_name, company_id, address, delivery_date,
                    available_lots, reserved_lots
             FROM operations ORDER BY created_at ASC, id ASC",
        )?;
        let rows = stmt.query_map([], map_operation_row)?;

        let mut operations = Vec::new();
        for row in rows {
            operations.push(operation_from_row(row?)?);
        }
        Ok(operations)
    }
}

type RawOperationRow = (String, String, String, String, String, u32, u32);

fn map_operation_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawOperationRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn operation_from_row(raw: RawOperationRow) -> Result<Operation> {
    let (id, commercial_name, company_id, address, delivery_date, available, reserved) = raw;
    let delivery_date = delivery_date.parse().map_err(|e| {
        crate::error::Error::CorruptedData(format!("operation {id}: bad delivery date: {e}"))
    })?;
    Ok(Operation {
        id,
        commercial_name,
        company_id,
        address,
        delivery_date,
        available_lots: available,
        reserved_lots: reserved,
    })
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
