use crate::AppState;
use axum::Router;

pub mod analyze;
pub mod candidates;

/// API v1 routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(analyze::routes())
        .nest("/candidates", candidates::routes())
}
