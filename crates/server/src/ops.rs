// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Business operations: creation rules and listing.

use uuid::Uuid;

use immo_core::{CreateOperationRequest, Operation};

use crate::db::Repository;
use crate::error::{Error, Result};
use crate::validate::validate_create;

/// Create an operation, enforcing the business rules in order:
/// field validation, client-reference replay, company existence,
/// duplicate-name window.
///
/// A request carrying a `client_ref` already seen is a replay of a queued
/// write; it answers with the record created the first time instead of
/// double-creating.
pub fn create_operation(
    repo: &Repository,
    request: &CreateOperationRequest,
) -> Result<Operation> {
    validate_create(request)?;

    if let Some(client_ref) = request.client_ref.as_deref() {
        if let Some(existing) = repo.find_by_client_ref(client_ref)? {
            tracing::info!(%client_ref, id = %existing.id, "replayed create, returning existing record");
            return Ok(existing);
        }
    }

    if !repo.company_exists(&request.company_id)? {
        return Err(Error::CompanyNotFound);
    }
    if repo.name_exists_in_window(&request.commercial_name, request.delivery_date)? {
        return Err(Error::DuplicateName);
    }

    let operation = Operation {
        id: Uuid::new_v4().to_string(),
        commercial_name: request.commercial_name.clone(),
        company_id: request.company_id.clone(),
        address: request.address.clone(),
        delivery_date: request.delivery_date,
        available_lots: request.available_lots,
        reserved_lots: request.reserved_lots,
    };
    repo.save(&operation, request.client_ref.as_deref())?;
    tracing::info!(id = %operation.id, name = %operation.commercial_name, "operation created");
    Ok(operation)
}

/// All operations, oldest first.
pub fn list_operations(repo: &Repository) -> Result<Vec<Operation>> {
    repo.list_all()
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
