// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! API error types with HTTP status code mapping.

use serde::Serialize;
use tracing::error;

use tm_core::ErrorKind;

/// Error codes that map to HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid request (400)
    BadRequest,
    /// Resource or route not found (404)
    NotFound,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    /// Get the HTTP reason phrase.
    pub const fn reason(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::Internal => "Internal Server Error",
        }
    }
}

/// API error with code and client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error.
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// Serializable body for this error.
    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            status_code: self.status_code(),
            message: &self.message,
            error: self.code.reason(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.reason(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Store failures keep their detail in the log; the client sees a generic message.
impl From<tm_core::Error> for ApiError {
    fn from(err: tm_core::Error) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApiError::bad_request(err.to_string()),
            ErrorKind::NotFound => ApiError::not_found(err.to_string()),
            ErrorKind::Internal => {
                error!(error = %err, "store failure");
                ApiError::internal("Internal server error")
            }
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody<'a> {
    pub status_code: u16,
    pub message: &'a str,
    pub error: &'static str,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
