//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.
//!
//! # Status code mapping
//!
//! The mapping is normalized across every endpoint:
//!
//! - missing user or account → 404
//! - malformed input (bad amount, ambiguous account) → 400
//! - duplicate signup → 409
//! - credential failure (user or admin login) → 401
//! - store/internal failure → 500
//!
//! Transfer gate outcomes (BLOCK, AUTH_REQUIRED, insufficient funds) are
//! not errors: they serialize as 200 responses with `success: false` in
//! [`crate::routes::transfer`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use ledgerline_core::AmountError;

use crate::ledger::LedgerError;
use crate::store::StoreError;
use crate::transfer::TransferError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing a collection file failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credential check failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(number) => {
                Self::NotFound(format!("account {number} not found"))
            }
        }
    }
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::UserNotFound(id) => Self::NotFound(format!("user {id} not found")),
            TransferError::NoAccount(id) => {
                Self::NotFound(format!("no account on file for user {id}"))
            }
            TransferError::AmbiguousAccount(_) => Self::Validation(err.to_string()),
        }
    }
}

/// JSON failure body: every endpoint responds with at least a `success`
/// boolean.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) | Self::Internal(_) => "Internal server error".to_owned(),
            Self::NotFound(msg) | Self::Validation(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Unauthorized(msg) => msg.clone(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
