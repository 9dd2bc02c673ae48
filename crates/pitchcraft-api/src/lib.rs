use axum::Router;
use axum::http::HeaderValue;
use pitchcraft::{AccentResolver, CandidateRepository, CandidateService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ApiOverrides, CorsConfig};
pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AccentResolver>,
    pub candidate_service: CandidateService,
}

impl AppState {
    pub fn new(resolver: AccentResolver, candidate_repository: Arc<dyn CandidateRepository>) -> Self {
        Self {
            resolver: Arc::new(resolver),
            candidate_service: CandidateService::new(candidate_repository),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::v1::analyze::analyze,
        crate::routes::v1::candidates::random_candidate,
    ),
    components(
        schemas(
            crate::routes::health::HealthResponse,
            crate::routes::v1::analyze::AnalyzeRequest,
            crate::routes::v1::analyze::AnalyzeResponse,
            crate::routes::v1::candidates::CandidateResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "analyze", description = "Pitch-accent resolution"),
        (name = "candidates", description = "Practice word retrieval")
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_any_origin {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build API application
pub fn build_app(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new().merge(routes::routes());
    if config.enable_swagger {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
