use axum::{Json, Router, extract::State, routing::post};
use pitchcraft::Resolution;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::error::{ApiError, ErrorResponse};

/// Request to analyze a word
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Resolved accent of a word
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub text: String,
    pub reading: String,
    /// Pitch level per mora (1 low, 2 high)
    pub accent_pattern: Vec<u8>,
    /// Bracket notation, e.g. "ハ[シ"
    pub accent_code: String,
    /// "dictionary" or "model"
    pub source: String,
}

impl From<Resolution> for AnalyzeResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            accent_pattern: resolution.pattern.levels(),
            source: resolution.source.label().to_string(),
            text: resolution.text,
            reading: resolution.reading,
            accent_code: resolution.notation,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

/// Resolve the pitch accent of a word
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Accent resolved", body = AnalyzeResponse),
        (status = 400, description = "Could not analyze text", body = ErrorResponse)
    ),
    tag = "analyze"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let resolver = state.resolver.clone();
    let resolution = tokio::task::spawn_blocking(move || resolver.resolve(&request.text))
        .await
        .map_err(|e| ApiError::Internal(format!("resolver task failed: {}", e)))??;

    Ok(Json(AnalyzeResponse::from(resolution)))
}
