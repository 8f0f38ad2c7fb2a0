//! Member Error Types
//!
//! This module provides member-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::entity::member::Member;

/// Member-specific result type alias
pub type MemberResult<T> = Result<T, MemberError>;

/// Data-access result type alias
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Data-access errors
// ============================================================================

/// Failures surfaced by the external member store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection, TLS or timeout failure talking to the store
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// The response body was not a list of member records
    #[error("Invalid response from database: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store returned no result set at all
    #[error("Database returned no result set")]
    NoData,
}

/// PostgREST error object
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

impl StoreError {
    /// Build an `Api` error from a failed response body
    ///
    /// Uses the PostgREST error object when the body is one, the raw text otherwise.
    pub fn api(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => {
                let mut message = err.message;
                if let Some(details) = err.details.filter(|d| !d.is_empty()) {
                    message = format!("{message}: {details}");
                }
                if let Some(code) = err.code {
                    message = format!("{message} [{code}]");
                }
                message
            }
            Err(_) if body.trim().is_empty() => "empty error response".to_string(),
            Err(_) => body.trim().to_string(),
        };
        StoreError::Api { status, message }
    }
}

/// Treats a missing result set as an empty one
pub trait StoreResultExt {
    fn or_empty(self) -> StoreResult<Vec<Member>>;
}

impl StoreResultExt for StoreResult<Vec<Member>> {
    fn or_empty(self) -> StoreResult<Vec<Member>> {
        match self {
            Err(StoreError::NoData) => Ok(Vec::new()),
            other => other,
        }
    }
}

// ============================================================================
// Use-case errors
// ============================================================================

/// Member-specific error variants
///
/// The `Display` text of each variant is the `message` of the response envelope.
#[derive(Debug, Error)]
pub enum MemberError {
    /// Request payload or path failed validation
    #[error("{0}")]
    Validation(String),

    /// Another member already uses this email
    #[error("Email already exists")]
    EmailTaken,

    /// No member with the requested id
    #[error("Member not found")]
    NotFound,

    /// Listing returned no result set
    #[error("Database returned no data")]
    NoData,

    /// Insert returned no result set
    #[error("Failed to add member")]
    AddFailed,

    /// Update touched no rows after the existence check passed
    #[error("Failed to update member")]
    UpdateFailed,

    /// Delete touched no rows after the existence check passed
    #[error("Failed to delete member")]
    DeleteFailed,

    /// Any other data-access failure
    #[error("Exception: {0}")]
    Store(#[from] StoreError),
}

impl MemberError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemberError::Validation(_) | MemberError::EmailTaken => ErrorKind::BadRequest,
            MemberError::NotFound => ErrorKind::NotFound,
            MemberError::NoData
            | MemberError::AddFailed
            | MemberError::UpdateFailed
            | MemberError::DeleteFailed
            | MemberError::Store(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MemberError::Store(e) => {
                tracing::error!(error = %e, "Member store error");
            }
            MemberError::NoData
            | MemberError::AddFailed
            | MemberError::UpdateFailed
            | MemberError::DeleteFailed => {
                tracing::error!(error = %self, "Member store returned an unexpected result");
            }
            MemberError::EmailTaken => {
                tracing::warn!("Duplicate member email rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Member request rejected");
            }
        }
    }
}

impl IntoResponse for MemberError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

/// Store configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
