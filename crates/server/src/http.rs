// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! HTTP layer: axum router and handlers for the operations API.
//!
//! Endpoints:
//! - POST /operations - create an operation (201, or 400 with a French error message)
//! - GET  /operations - list all operations (200, empty list when none exist)
//!
//! All responses use Content-Type: application/json.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::sync::Mutex;

use immo_core::{messages, CreateOperationRequest, CreateOperationResponse, ListOperationsResponse};

use crate::db::Repository;
use crate::ops;

/// Shared handler state.
pub struct AppState {
    pub repo: Mutex<Repository>,
}

impl AppState {
    pub fn new(repo: Repository) -> Self {
        AppState {
            repo: Mutex::new(repo),
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/operations", get(handle_list).post(handle_create))
        .fallback(handle_not_found)
        .with_state(state)
}

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({"error": message}))).into_response()
}

/// Fallback handler for unmatched routes.
async fn handle_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// POST /operations
async fn handle_create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateOperationRequest>,
) -> Response {
    let repo = state.repo.lock().await;
    match ops::create_operation(&repo, &request) {
        Ok(operation) => (
            StatusCode::CREATED,
            Json(CreateOperationResponse {
                message: messages::OPERATION_CREATED.to_string(),
                data: Some(operation),
            }),
        )
            .into_response(),
        Err(err) if err.is_rejection() => {
            tracing::debug!(error = %err, "create rejected");
            json_error(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "create failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "erreur interne du serveur")
        }
    }
}

/// GET /operations
async fn handle_list(State(state): State<Arc<AppState>>) -> Response {
    let repo = state.repo.lock().await;
    match ops::list_operations(&repo) {
        Ok(data) => (StatusCode::OK, Json(ListOperationsResponse { data })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "list failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "erreur interne du serveur")
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
