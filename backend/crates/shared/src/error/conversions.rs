//! Error conversions - HTTP integration for [`AppError`]
//!
//! Renders [`AppError`] as the failure envelope and converts axum
//! extractor rejections into client errors.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::app_error::AppError;
use crate::envelope::Envelope;

// ============================================================================
// Axum conversions
// ============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(Envelope::failure(self.message()))).into_response()
    }
}

/// Every JSON body rejection (syntax, missing field, wrong content type)
/// is reported as 400 with axum's description of the problem.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}

/// Path parameters that fail to decode are reported as 400.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}
