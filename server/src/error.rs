//! HTTP mapping for store failures.
//!
//! # Design
//! Every failure path reports a transport-level status plus a small JSON
//! body, one consistent shape for all routes: `NotFound` becomes 404 and
//! `Validation` becomes 422, matching the status axum itself uses when a
//! request body fails schema extraction.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use todo_core::StoreError;

/// Wrapper carrying a [`StoreError`] out of a handler.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] StoreError);

/// JSON error payload returned alongside the failure status.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.0 {
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error_code(),
            message: self.0.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
