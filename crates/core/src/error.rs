// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tm-core operations.

use thiserror::Error;

use crate::card::CardType;

/// All possible errors that can occur in tm-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid card type")]
    InvalidCardType(String),

    #[error("Invalid id")]
    InvalidId(String),

    #[error("Invalid category")]
    InvalidCategory(String),

    #[error("{0}")]
    MissingFields(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Card with id {id} not found")]
    CardNotFound { card_type: CardType, id: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// Coarse classification of an [`Error`], used at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was malformed or failed validation.
    Validation,
    /// No row matches the requested type and id.
    NotFound,
    /// The store failed for a reason unrelated to the request.
    Internal,
}

impl Error {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCardType(_)
            | Error::InvalidId(_)
            | Error::InvalidCategory(_)
            | Error::MissingFields(_)
            | Error::InvalidInput(_) => ErrorKind::Validation,
            Error::CardNotFound { .. } => ErrorKind::NotFound,
            Error::Database(_)
            | Error::Io(_)
            | Error::CorruptedData(_) => ErrorKind::Internal,
        }
    }
}

/// A specialized Result type for tm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
