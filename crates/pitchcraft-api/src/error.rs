//! Error types for pitchcraft-api

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pitchcraft::{AccentError, CandidateError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resolution error: {0}")]
    Resolution(#[from] AccentError),

    #[error("Candidate error: {0}")]
    Candidate(#[from] CandidateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Resolution(AccentError::UnresolvableInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Candidate(CandidateError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match status {
            StatusCode::BAD_REQUEST => "Could not analyze text".to_string(),
            StatusCode::NOT_FOUND => "No candidate found".to_string(),
            _ => {
                error!("{}", self);
                "Internal server error".to_string()
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
