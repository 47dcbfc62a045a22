// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! immo-server: REST backend for immo operations.
//!
//! Exposes create/list endpoints over axum, backed by a SQLite repository.
//! Exported as a library so integration tests can run the real router
//! against an in-memory database.

pub mod db;
pub mod error;
pub mod http;
pub mod ops;
pub mod validate;

pub use db::Repository;
pub use error::{Error, Result};
pub use http::{router, AppState};
