use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use pitchcraft::FetchedCandidate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::AppState;
use crate::error::{ApiError, ErrorResponse};

fn default_min_mora() -> usize {
    2
}

fn default_max_mora() -> usize {
    10
}

/// Mora-count range for random candidates
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RandomCandidateQuery {
    /// Shortest acceptable word, in morae
    #[serde(default = "default_min_mora")]
    #[param(default = 2)]
    pub min_mora: usize,

    /// Longest acceptable word, in morae
    #[serde(default = "default_max_mora")]
    #[param(default = 10)]
    pub max_mora: usize,
}

/// A practice word
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateResponse {
    pub text: String,
    pub reading: String,
    pub accent_pattern: Vec<u8>,
    pub accent_code: String,
    pub mora_count: usize,
}

impl From<FetchedCandidate> for CandidateResponse {
    fn from(fetched: FetchedCandidate) -> Self {
        let record = fetched.record;
        Self {
            accent_pattern: record.pattern.levels(),
            text: record.surface,
            reading: record.reading,
            accent_code: fetched.notation,
            mora_count: record.mora_count,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/random", get(random_candidate))
}

/// Get a random practice word
#[utoipa::path(
    get,
    path = "/api/v1/candidates/random",
    params(RandomCandidateQuery),
    responses(
        (status = 200, description = "Random candidate", body = CandidateResponse),
        (status = 404, description = "No candidate in range", body = ErrorResponse)
    ),
    tag = "candidates"
)]
pub async fn random_candidate(
    State(state): State<AppState>,
    Query(query): Query<RandomCandidateQuery>,
) -> Result<Json<CandidateResponse>, ApiError> {
    let fetched = state
        .candidate_service
        .fetch_candidate(query.min_mora, query.max_mora)
        .await?;

    Ok(Json(CandidateResponse::from(fetched)))
}
