// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type shared by the point query service and its callers.
//!
//! | Variant | Meaning | HTTP mapping |
//! |---------|---------|--------------|
//! | [`Error::NotFound`] | Unknown point id | `404 Not Found` |
//! | [`Error::MalformedId`] | Path id is not an integer | `400 Bad Request` |
//! | [`Error::Validation`] | Missing or invalid input | `422 Unprocessable Entity` |
//! | [`Error::Storage`] | Store or image storage failure | `500 Internal Server Error` |

use std::error::Error as StdError;

use thiserror::Error;
use validator::ValidationErrors;

use crate::model::PointId;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by [`PointService`](crate::PointService) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No point exists with the requested id.
    #[error("Point {0} not found")]
    NotFound(PointId),

    /// The point id could not be parsed as an integer.
    #[error("Malformed point id `{0}`")]
    MalformedId(String),

    /// Input failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The underlying store failed.
    #[error("Storage failure: {0}")]
    Storage(#[source] Box<dyn StdError + Send + Sync>)
}

impl Error {
    /// Wrap any store error.
    pub fn storage<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static
    {
        Self::Storage(Box::new(err))
    }

    /// Build a validation error from a message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a not-found error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a validation error.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a malformed id error.
    pub const fn is_malformed_id(&self) -> bool {
        matches!(self, Self::MalformedId(_))
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
