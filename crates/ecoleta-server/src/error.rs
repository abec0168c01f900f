// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping from domain errors to HTTP responses.
//!
//! | Domain error | Response |
//! |--------------|----------|
//! | `NotFound` | `404 Not Found` |
//! | `MalformedId` | `400 Bad Request` |
//! | `Validation` | `422 Unprocessable Entity` |
//! | `Storage` | `500 Internal Server Error`, cause logged |

use axum::extract::multipart::MultipartError;
use ecoleta_core::Error;
use masterror::AppError;

/// Convert a service error into a masterror response.
pub fn app_error(err: Error) -> AppError {
    match err {
        Error::NotFound(_) => AppError::not_found(err.to_string()),
        Error::MalformedId(_) => AppError::bad_request(err.to_string()),
        Error::Validation(message) => AppError::validation(message),
        Error::Storage(source) => {
            tracing::error!(error = %source, "Storage failure");
            AppError::internal("Internal server error")
        }
    }
}

/// Reject an unreadable multipart body.
pub fn multipart_error(err: MultipartError) -> AppError {
    tracing::debug!(error = %err, "Malformed multipart body");
    AppError::bad_request(err.body_text())
}
