// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! immo-core: Shared library for the immo operations manager.
//!
//! This crate provides the domain types, wire contracts, and canonical
//! user-facing message strings used by both the immo client (offline-first
//! sync layer) and the immo server (REST backend).

pub mod messages;
pub mod operation;
pub mod wire;

pub use operation::{
    DisplayOperation, Operation, OperationDraft, PendingWrite, MAX_COMMERCIAL_NAME_LEN,
};
pub use wire::{ApiError, CreateOperationRequest, CreateOperationResponse, ListOperationsResponse};
