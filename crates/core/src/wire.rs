// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Wire contracts for the operations REST API.
//!
//! The JSON field names (camelCase) are part of the public API surface and
//! must not change independently of the server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::operation::{Operation, OperationDraft};

/// Body of `POST /operations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperationRequest {
    pub commercial_name: String,
    pub company_id: String,
    pub address: String,
    pub delivery_date: NaiveDate,
    pub available_lots: u32,
    #[serde(default)]
    pub reserved_lots: u32,
    /// Client-generated reference for idempotent replay of queued writes.
    /// Absent for ordinary online creates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ref: Option<String>,
}

impl CreateOperationRequest {
    /// Build a request from a form draft, reserving zero lots.
    pub fn from_draft(draft: &OperationDraft, client_ref: Option<String>) -> Self {
        CreateOperationRequest {
            commercial_name: draft.commercial_name.clone(),
            company_id: draft.company_id.clone(),
            address: draft.address.clone(),
            delivery_date: draft.delivery_date,
            available_lots: draft.available_lots,
            reserved_lots: 0,
            client_ref,
        }
    }
}

/// Body of a `201` reply to `POST /operations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperationResponse {
    pub message: String,
    /// The created record. Optional so a message-only `201` from an older
    /// server still deserializes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Operation>,
}

/// Body of a `200` reply to `GET /operations`. Always an array, never 404.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperationsResponse {
    pub data: Vec<Operation>,
}

/// Body of any `400` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
