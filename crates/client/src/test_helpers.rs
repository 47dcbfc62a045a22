// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Shared test fixtures: a scriptable in-memory gateway and draft builders.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use immo_core::{Operation, OperationDraft};

use crate::error::GatewayError;
use crate::gateway::{GatewayFuture, OperationGateway};

type ListFn = Box<dyn Fn() -> Result<Vec<Operation>, GatewayError> + Send + Sync>;
type CreateFn =
    Box<dyn Fn(&OperationDraft, Option<&str>) -> Result<Operation, GatewayError> + Send + Sync>;

/// Scriptable gateway: behaviour is injected as closures, call counts are
/// tracked for assertions.
pub(crate) struct MockGateway {
    on_list: ListFn,
    on_create: CreateFn,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl MockGateway {
    pub fn new(on_list: ListFn, on_create: CreateFn) -> Self {
        MockGateway {
            on_list,
            on_create,
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Gateway whose `create` runs the given closure; `list` returns empty.
    pub fn with_create<F>(on_create: F) -> Self
    where
        F: Fn(&OperationDraft, Option<&str>) -> Result<Operation, GatewayError>
            + Send
            + Sync
            + 'static,
    {
        Self::new(Box::new(|| Ok(Vec::new())), Box::new(on_create))
    }

    /// Gateway whose `list` runs the given closure; `create` echoes the draft.
    pub fn with_list<F>(on_list: F) -> Self
    where
        F: Fn() -> Result<Vec<Operation>, GatewayError> + Send + Sync + 'static,
    {
        Self::new(
            Box::new(on_list),
            Box::new(|draft, _| Ok(operation_from(draft, "srv-1"))),
        )
    }
}

impl OperationGateway for MockGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<Operation>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let result = (self.on_list)();
        Box::pin(async move { result })
    }

    fn create<'a>(
        &'a self,
        draft: &'a OperationDraft,
        client_ref: Option<&'a str>,
    ) -> GatewayFuture<'a, Operation> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let result = (self.on_create)(draft, client_ref);
        Box::pin(async move { result })
    }
}

/// The server-side record a successful create would return.
pub(crate) fn operation_from(draft: &OperationDraft, id: &str) -> Operation {
    Operation {
        id: id.to_string(),
        commercial_name: draft.commercial_name.clone(),
        company_id: draft.company_id.clone(),
        address: draft.address.clone(),
        delivery_date: draft.delivery_date,
        available_lots: draft.available_lots,
        reserved_lots: 0,
    }
}

pub(crate) fn sample_draft(name: &str) -> OperationDraft {
    OperationDraft {
        commercial_name: name.to_string(),
        company_id: "1111".to_string(),
        address: "17 Rue de la Paix, 75002 Paris".to_string(),
        delivery_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        available_lots: 6,
    }
}
