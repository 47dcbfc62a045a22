// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Gateway abstraction for the remote operations API.
//!
//! Provides a trait-based gateway layer that enables:
//! - Real HTTP calls for production (see [`crate::http::HttpGateway`])
//! - Mock gateways for unit testing

use std::future::Future;
use std::pin::Pin;

use immo_core::{Operation, OperationDraft};

use crate::error::GatewayError;

/// Boxed future returned by gateway methods.
pub type GatewayFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// Remote API for reading and creating operations.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait OperationGateway: Send + Sync {
    /// Fetch all operations from the server.
    fn list(&self) -> GatewayFuture<'_, Vec<Operation>>;

    /// Create an operation on the server.
    ///
    /// `client_ref` carries the local queue id when replaying an offline
    /// write, so the server can deduplicate a retried request.
    fn create<'a>(
        &'a self,
        draft: &'a OperationDraft,
        client_ref: Option<&'a str>,
    ) -> GatewayFuture<'a, Operation>;
}

/// How the retry layer should handle a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Transient; retrying may succeed.
    Retryable,
    /// The server rejected the request as invalid; replaying it will
    /// always fail the same way.
    Rejected,
    /// Neither transient nor a rejection. Do not retry.
    Terminal,
}

/// Classifies gateway failures for the retry layer.
///
/// Rejections are recognised by substrings of the server's French error
/// messages. The defaults cover every message the server emits today;
/// callers with a customised server can extend the list.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rejection_markers: Vec<String>,
}

impl ErrorClassifier {
    pub fn new(rejection_markers: Vec<String>) -> Self {
        ErrorClassifier { rejection_markers }
    }

    /// Decide how to handle a failure.
    pub fn classify(&self, error: &GatewayError) -> ErrorClass {
        match error {
            GatewayError::Network(_) => ErrorClass::Retryable,
            GatewayError::Server { status, message } => {
                if *status >= 500 {
                    ErrorClass::Retryable
                } else if self
                    .rejection_markers
                    .iter()
                    .any(|marker| message.contains(marker.as_str()))
                {
                    ErrorClass::Rejected
                } else {
                    ErrorClass::Terminal
                }
            }
            GatewayError::WentOffline { .. } | GatewayError::RetryExhausted { .. } => {
                ErrorClass::Terminal
            }
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        ErrorClassifier::new(
            [
                "n'existe pas",
                "existe déjà",
                "ne doit pas dépasser",
                "doit être positif",
                "est requis",
                "est requise",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
