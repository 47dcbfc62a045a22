// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Request validation for operation creation.

use immo_core::{CreateOperationRequest, MAX_COMMERCIAL_NAME_LEN};

use crate::error::{Error, Result};

/// Check the field-level rules before touching the repository.
pub fn validate_create(request: &CreateOperationRequest) -> Result<()> {
    if request.commercial_name.chars().count() > MAX_COMMERCIAL_NAME_LEN {
        return Err(Error::NameTooLong);
    }
    if request.available_lots < 1 {
        return Err(Error::InvalidLotCount);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
