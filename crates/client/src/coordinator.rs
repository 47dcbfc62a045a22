// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Sync coordinator: routes writes, drains the offline queue, serves reads.
//!
//! The coordinator owns the gateway, the local store and the connectivity
//! monitor. Writes go straight to the server while online and into the
//! durable queue while offline; a drain pass replays the queue when
//! connectivity returns. Reads prefer the live API and fall back to the
//! cached snapshot (offline) or the demonstration dataset (online but
//! unreachable).

use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::join_all;
use tokio::sync::{watch, Mutex};

use immo_core::{messages, DisplayOperation, OperationDraft};

use crate::connectivity::{ConnectivityMonitor, ConnectivityState};
use crate::demo::demonstration_operations;
use crate::error::ClientError;
use crate::gateway::OperationGateway;
use crate::store::OfflineStore;

/// Lifecycle of the queue drain.
///
/// `Success` and `Error` are terminal display states: they persist until
/// the next drain attempt overwrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Syncing,
    Success,
    Error,
}

/// Where a fetch result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fresh from the server.
    Live,
    /// Last cached snapshot, shown while offline.
    Cache,
    /// Built-in demonstration records.
    Demo,
}

/// Per-record outcome of a drain pass.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub local_id: String,
    /// `None` on success, the user-facing message otherwise.
    pub error: Option<String>,
}

/// Aggregate result of a drain pass.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub synced: usize,
    pub failed: usize,
    pub message: String,
    pub outcomes: Vec<ItemOutcome>,
}

impl SyncReport {
    fn empty(message: &str) -> Self {
        SyncReport {
            synced: 0,
            failed: 0,
            message: message.to_string(),
            outcomes: Vec::new(),
        }
    }
}

/// Result of a read, annotated with its provenance.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub operations: Vec<DisplayOperation>,
    pub source: DataSource,
    /// User-facing notice when the result is not live data.
    pub notice: Option<String>,
}

/// Client-side sync state machine.
pub struct SyncCoordinator<G> {
    gateway: G,
    store: Mutex<OfflineStore>,
    connectivity: ConnectivityMonitor,
    status_tx: watch::Sender<SyncStatus>,
    pending_tx: watch::Sender<u64>,
    draining: AtomicBool,
}

impl<G: OperationGateway> SyncCoordinator<G> {
    pub fn new(
        gateway: G,
        store: OfflineStore,
        connectivity: ConnectivityMonitor,
    ) -> Result<Self, ClientError> {
        let initial_pending = store.pending_count()?;
        let (status_tx, _) = watch::channel(SyncStatus::Idle);
        let (pending_tx, _) = watch::channel(initial_pending);
        Ok(SyncCoordinator {
            gateway,
            store: Mutex::new(store),
            connectivity,
            status_tx,
            pending_tx,
            draining: AtomicBool::new(false),
        })
    }

    /// Current drain status.
    pub fn status(&self) -> SyncStatus {
        *self.status_tx.borrow()
    }

    /// Observe drain status transitions.
    pub fn subscribe_status(&self) -> watch::Receiver<SyncStatus> {
        self.status_tx.subscribe()
    }

    /// Number of queued writes, as last recomputed.
    pub fn pending_count(&self) -> u64 {
        *self.pending_tx.borrow()
    }

    /// Observe pending-count changes.
    pub fn subscribe_pending(&self) -> watch::Receiver<u64> {
        self.pending_tx.subscribe()
    }

    /// Submit a create request.
    ///
    /// Online, the write goes straight through the gateway and the
    /// authoritative record comes back. Offline, the draft is queued and an
    /// optimistic pending row is returned immediately.
    pub async fn create(&self, draft: &OperationDraft) -> Result<DisplayOperation, ClientError> {
        if !self.connectivity.is_online() {
            let record = self.store.lock().await.enqueue(draft)?;
            self.refresh_pending_count().await;
            tracing::info!(local_id = %record.local_id, "accepted write offline");
            return Ok(DisplayOperation::from_pending(&record));
        }

        let created = self.gateway.create(draft, None).await?;
        Ok(DisplayOperation::from_record(&created))
    }

    /// Drain the offline queue: replay every pending write concurrently,
    /// remove the ones that reach the server, keep the rest queued.
    pub async fn sync_pending(&self) -> Result<SyncReport, ClientError> {
        if !self.connectivity.is_online() {
            return Ok(SyncReport::empty(messages::OFFLINE_CANNOT_SYNC));
        }
        if self.draining.swap(true, Ordering::SeqCst) {
            return Ok(SyncReport::empty(messages::SYNC_IN_PROGRESS));
        }
        let _guard = DrainGuard(&self.draining);

        self.status_tx.send_replace(SyncStatus::Syncing);

        let pending = self.store.lock().await.list_pending()?;
        if pending.is_empty() {
            self.status_tx.send_replace(SyncStatus::Idle);
            return Ok(SyncReport::empty(messages::NOTHING_TO_SYNC));
        }

        tracing::info!(count = pending.len(), "draining offline queue");

        // Fan out all replays, then wait for the full set to settle. One
        // item's failure must not block another's success.
        let attempts = pending.iter().map(|record| async move {
            let result = self
                .gateway
                .create(&record.draft, Some(&record.local_id))
                .await;
            (record.local_id.clone(), result)
        });
        let settled = join_all(attempts).await;

        let mut outcomes = Vec::with_capacity(settled.len());
        let mut synced = 0usize;
        let mut failed = 0usize;
        {
            let store = self.store.lock().await;
            for (local_id, result) in settled {
                match result {
                    Ok(created) => {
                        store.remove(&local_id)?;
                        synced += 1;
                        tracing::debug!(%local_id, server_id = %created.id, "replayed queued write");
                        outcomes.push(ItemOutcome {
                            local_id,
                            error: None,
                        });
                    }
                    Err(err) => {
                        failed += 1;
                        tracing::warn!(%local_id, error = %err, "queued write failed to sync");
                        outcomes.push(ItemOutcome {
                            local_id,
                            error: Some(err.user_message()),
                        });
                    }
                }
            }
        }
        self.refresh_pending_count().await;

        let (status, message) = if failed == 0 {
            (SyncStatus::Success, messages::synced_ok(synced))
        } else {
            (SyncStatus::Error, messages::sync_partial(synced, failed))
        };
        self.status_tx.send_replace(status);

        Ok(SyncReport {
            synced,
            failed,
            message,
            outcomes,
        })
    }

    /// Watch connectivity and drain the queue on every offline-to-online
    /// transition. Runs until the monitor is dropped.
    pub async fn run(&self) {
        let mut rx = self.connectivity.subscribe();
        let mut previous = *rx.borrow();

        // Writes may already be queued from a previous session.
        if previous == ConnectivityState::Online && self.pending_count() > 0 {
            if let Err(err) = self.sync_pending().await {
                tracing::error!(error = %err, "startup drain failed");
            }
        }

        while rx.changed().await.is_ok() {
            let current = *rx.borrow();
            if previous == ConnectivityState::Offline && current == ConnectivityState::Online {
                tracing::info!("connectivity restored");
                if let Err(err) = self.sync_pending().await {
                    tracing::error!(error = %err, "drain after reconnect failed");
                }
            }
            previous = current;
        }
    }

    /// Fetch the list view.
    ///
    /// Online: live data, snapshot cached, pending rows appended. Online but
    /// unreachable: demonstration dataset. Offline: cached snapshot plus
    /// pending rows, or the demonstration dataset when nothing is stored.
    /// Storage faults degrade to empty lists rather than failing the read.
    pub async fn fetch_operations(&self) -> FetchResult {
        if self.connectivity.is_online() {
            match self.gateway.list().await {
                Ok(records) => {
                    let mut store = self.store.lock().await;
                    if let Err(err) = store.cache_snapshot(&records) {
                        tracing::warn!(error = %err, "failed to refresh read cache");
                    }
                    let pending = store.list_pending().unwrap_or_else(|err| {
                        tracing::warn!(error = %err, "failed to read pending queue");
                        Vec::new()
                    });
                    drop(store);

                    let mut operations: Vec<DisplayOperation> =
                        records.iter().map(DisplayOperation::from_record).collect();
                    operations.extend(pending.iter().map(DisplayOperation::from_pending));
                    FetchResult {
                        operations,
                        source: DataSource::Live,
                        notice: None,
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "live fetch failed, showing demonstration data");
                    FetchResult {
                        operations: demonstration_operations()
                            .iter()
                            .map(DisplayOperation::from_record)
                            .collect(),
                        source: DataSource::Demo,
                        notice: Some(messages::API_UNREACHABLE_SHOWING_DEMO.to_string()),
                    }
                }
            }
        } else {
            let store = self.store.lock().await;
            let cached = store.cached_operations().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "failed to read cached snapshot");
                Vec::new()
            });
            let pending = store.list_pending().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "failed to read pending queue");
                Vec::new()
            });
            drop(store);

            if cached.is_empty() && pending.is_empty() {
                return FetchResult {
                    operations: demonstration_operations()
                        .iter()
                        .map(DisplayOperation::from_record)
                        .collect(),
                    source: DataSource::Demo,
                    notice: Some(messages::OFFLINE_SHOWING_CACHE.to_string()),
                };
            }

            let mut operations: Vec<DisplayOperation> =
                cached.iter().map(DisplayOperation::from_record).collect();
            operations.extend(pending.iter().map(DisplayOperation::from_pending));
            FetchResult {
                operations,
                source: DataSource::Cache,
                notice: Some(messages::OFFLINE_SHOWING_CACHE.to_string()),
            }
        }
    }

    async fn refresh_pending_count(&self) {
        match self.store.lock().await.pending_count() {
            Ok(count) => {
                self.pending_tx.send_replace(count);
            }
            Err(err) => tracing::warn!(error = %err, "failed to recount pending queue"),
        }
    }
}

/// Resets the re-entrancy flag when a drain pass ends, including on error.
struct DrainGuard<'a>(&'a AtomicBool);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
