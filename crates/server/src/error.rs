// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Error types for immo-server operations.
//!
//! Business rejections render as the French messages the client matches on,
//! so their wording lives in immo-core and is referenced here rather than
//! repeated.

use thiserror::Error;

use immo_core::messages;

/// All possible errors from repository and business operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", messages::NAME_TOO_LONG)]
    NameTooLong,

    #[error("{}", messages::LOTS_NOT_POSITIVE)]
    InvalidLotCount,

    #[error("{}", messages::COMPANY_NOT_FOUND)]
    CompanyNotFound,

    #[error("{}", messages::DUPLICATE_NAME)]
    DuplicateName,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted record: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Whether this error is a client-side rejection (HTTP 400) rather
    /// than a server fault (HTTP 500).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::NameTooLong
                | Error::InvalidLotCount
                | Error::CompanyNotFound
                | Error::DuplicateName
        )
    }
}

/// Result type for immo-server operations.
pub type Result<T> = std::result::Result<T, Error>;
