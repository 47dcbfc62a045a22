// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Retry layer with exponential backoff and jitter.
//!
//! [`RetryingGateway`] wraps any [`OperationGateway`] and replays transient
//! failures. Rejections (validation errors) and terminal failures pass
//! through untouched, and a retry sequence aborts early when connectivity
//! drops so the write can go back to the queue.

use std::time::Duration;

use rand::Rng;

use immo_core::{Operation, OperationDraft};

use crate::connectivity::ConnectivityMonitor;
use crate::error::GatewayError;
use crate::gateway::{ErrorClass, ErrorClassifier, GatewayFuture, OperationGateway};

/// Retry budget and backoff base.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Jittered delay before retry number `retry` (zero-based).
    ///
    /// The delay is drawn uniformly from `[2^retry * base / 2, 2^retry * base)`
    /// so concurrent replays do not thunder in lockstep.
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        let exp = self.base_delay_ms.saturating_mul(1u64 << retry.min(16));
        let factor = rand::thread_rng().gen_range(0.5f64..1.0);
        Duration::from_millis((exp as f64 * factor) as u64)
    }
}

/// Gateway decorator that retries transient failures.
pub struct RetryingGateway<G> {
    inner: G,
    policy: RetryPolicy,
    classifier: ErrorClassifier,
    connectivity: ConnectivityMonitor,
}

impl<G: OperationGateway> RetryingGateway<G> {
    pub fn new(inner: G, policy: RetryPolicy, connectivity: ConnectivityMonitor) -> Self {
        RetryingGateway {
            inner,
            policy,
            classifier: ErrorClassifier::default(),
            connectivity,
        }
    }

    /// Replace the default error classifier.
    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    async fn run<'a, T, F>(&'a self, mut op: F) -> Result<T, GatewayError>
    where
        F: FnMut() -> GatewayFuture<'a, T> + Send,
    {
        let mut attempt: u32 = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => match self.classifier.classify(&err) {
                    ErrorClass::Rejected | ErrorClass::Terminal => return Err(err),
                    ErrorClass::Retryable => {
                        attempt += 1;
                        if attempt >= self.policy.max_attempts {
                            return Err(GatewayError::RetryExhausted {
                                attempts: attempt,
                                source: Box::new(err),
                            });
                        }
                        if !self.connectivity.is_online() {
                            return Err(GatewayError::WentOffline { attempt });
                        }
                        let delay = self.policy.backoff_delay(attempt - 1);
                        tracing::debug!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "retrying after transient failure"
                        );
                        tokio::time::sleep(delay).await;
                        // Connectivity may have dropped during the backoff.
                        if !self.connectivity.is_online() {
                            return Err(GatewayError::WentOffline { attempt });
                        }
                    }
                },
            }
        }
    }
}

impl<G: OperationGateway> OperationGateway for RetryingGateway<G> {
    fn list(&self) -> GatewayFuture<'_, Vec<Operation>> {
        Box::pin(self.run(move || self.inner.list()))
    }

    fn create<'a>(
        &'a self,
        draft: &'a OperationDraft,
        client_ref: Option<&'a str>,
    ) -> GatewayFuture<'a, Operation> {
        Box::pin(self.run(move || self.inner.create(draft, client_ref)))
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
