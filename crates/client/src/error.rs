// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Error types for the sync client.

use thiserror::Error;

/// Errors surfaced by gateway implementations and the retry layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response (DNS failure, refused
    /// connection, timeout, malformed body).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and an error message.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Connectivity was lost between attempts; the write stays queued.
    #[error("went offline after {attempt} attempt(s)")]
    WentOffline { attempt: u32 },

    /// All retry attempts were consumed without a success.
    #[error("gave up after {attempts} attempt(s): {source}")]
    RetryExhausted {
        attempts: u32,
        source: Box<GatewayError>,
    },
}

impl GatewayError {
    /// The user-facing message for this error.
    ///
    /// Server rejections carry the server's own wording; everything else
    /// falls back to the display form.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Server { message, .. } => message.clone(),
            GatewayError::RetryExhausted { source, .. } => source.user_message(),
            other => other.to_string(),
        }
    }
}

/// Errors from the local SQLite-backed store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted queue entry: {0}")]
    CorruptedData(String),
}

/// Top-level error for coordinator operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
