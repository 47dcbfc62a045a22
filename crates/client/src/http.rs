// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! HTTP gateway implementation backed by ureq.
//!
//! ureq is a blocking client, so every request runs on the tokio blocking
//! pool. The agent is configured to surface non-2xx responses as plain
//! responses rather than transport errors: the server puts its French
//! validation messages in `400` bodies and those must reach the caller.

use std::time::Duration;

use ureq::Agent;

use immo_core::{
    ApiError, CreateOperationRequest, CreateOperationResponse, ListOperationsResponse, Operation,
    OperationDraft,
};

use crate::error::GatewayError;
use crate::gateway::{GatewayFuture, OperationGateway};

/// Gateway talking to the immo REST API.
pub struct HttpGateway {
    agent: Agent,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the API rooted at `base_url`
    /// (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(10)))
            .build();
        HttpGateway {
            agent: config.new_agent(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn operations_url(&self) -> String {
        format!("{}/operations", self.base_url)
    }
}

impl OperationGateway for HttpGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<Operation>> {
        let agent = self.agent.clone();
        let url = self.operations_url();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || fetch_list(&agent, &url))
                .await
                .map_err(|e| GatewayError::Network(format!("request task failed: {e}")))?
        })
    }

    fn create<'a>(
        &'a self,
        draft: &'a OperationDraft,
        client_ref: Option<&'a str>,
    ) -> GatewayFuture<'a, Operation> {
        let agent = self.agent.clone();
        let url = self.operations_url();
        let request = CreateOperationRequest::from_draft(draft, client_ref.map(str::to_string));
        Box::pin(async move {
            tokio::task::spawn_blocking(move || send_create(&agent, &url, &request))
                .await
                .map_err(|e| GatewayError::Network(format!("request task failed: {e}")))?
        })
    }
}

fn fetch_list(agent: &Agent, url: &str) -> Result<Vec<Operation>, GatewayError> {
    let resp = agent
        .get(url)
        .call()
        .map_err(|e| GatewayError::Network(e.to_string()))?;
    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, resp));
    }
    let body: ListOperationsResponse = resp
        .into_body()
        .read_json()
        .map_err(|e| GatewayError::Network(format!("invalid response body: {e}")))?;
    Ok(body.data)
}

fn send_create(
    agent: &Agent,
    url: &str,
    request: &CreateOperationRequest,
) -> Result<Operation, GatewayError> {
    let resp = agent
        .post(url)
        .send_json(request)
        .map_err(|e| GatewayError::Network(e.to_string()))?;
    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, resp));
    }
    let body: CreateOperationResponse = resp
        .into_body()
        .read_json()
        .map_err(|e| GatewayError::Network(format!("invalid response body: {e}")))?;
    body.data
        .ok_or_else(|| GatewayError::Network("create response carried no record".to_string()))
}

/// Turn a non-2xx response into a [`GatewayError::Server`], keeping the
/// server's message when the body parses as the API error shape.
fn error_from_response(status: u16, resp: ureq::http::Response<ureq::Body>) -> GatewayError {
    let message = resp
        .into_body()
        .read_json::<ApiError>()
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("HTTP {status}"));
    GatewayError::Server { status, message }
}
