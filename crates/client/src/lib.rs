// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! immo-client: Offline-resilient sync client for immo operations.
//!
//! This crate owns the client-side data path: the local write queue backed
//! by SQLite, the HTTP gateway with retry and error classification, the
//! connectivity monitor, and the coordinator that drains queued writes when
//! the device comes back online.

pub mod connectivity;
pub mod coordinator;
pub mod demo;
pub mod error;
pub mod gateway;
pub mod http;
pub mod retry;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use connectivity::{ConnectivityMonitor, ConnectivityState};
pub use coordinator::{DataSource, FetchResult, ItemOutcome, SyncCoordinator, SyncReport, SyncStatus};
pub use error::{ClientError, GatewayError, StoreError};
pub use gateway::{ErrorClass, ErrorClassifier, GatewayFuture, OperationGateway};
pub use http::HttpGateway;
pub use retry::{RetryPolicy, RetryingGateway};
pub use store::OfflineStore;
