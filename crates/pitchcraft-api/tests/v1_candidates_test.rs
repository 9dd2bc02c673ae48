use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pitchcraft::{
    AccentResolver, BuildConfig, CandidateService, InMemoryCandidateRepository, Lexicon,
    PredictionTable,
};
use pitchcraft_api::{ApiConfig, AppState, build_app};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

const LEXICON: &str = "\
箸\tハシ\t名詞,普通名詞\t1
桜\tサクラ\t名詞,普通名詞\t0
富士山\tフジサン\t名詞,固有名詞\t1
";

fn resolver() -> AccentResolver {
    let lexicon = Arc::new(Lexicon::parse(LEXICON).unwrap());
    AccentResolver::new(lexicon.clone(), lexicon, Arc::new(PredictionTable::default()))
}

/// Create a test application whose store holds the lexicon's words
async fn create_test_app() -> axum::Router {
    let repository = Arc::new(InMemoryCandidateRepository::new());
    CandidateService::new(repository.clone())
        .build(["箸", "桜", "富士山"], &resolver(), &BuildConfig::default())
        .await
        .unwrap();

    let state = AppState::new(resolver(), repository);
    build_app(state, &ApiConfig::default())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_value: Value = if body_bytes.is_empty() {
        json!(null)
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or_else(|_| json!(null))
    };

    (status, body_value)
}

#[tokio::test]
async fn test_random_candidate_in_range() {
    let app = create_test_app().await;

    let (status, body) = get_json(app, "/api/v1/candidates/random?min_mora=3&max_mora=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "桜");
    assert_eq!(body["reading"], "サクラ");
    assert_eq!(body["accent_pattern"], json!([1, 2, 2]));
    assert_eq!(body["accent_code"], "サ[クラ");
    assert_eq!(body["mora_count"], 3);
}

#[tokio::test]
async fn test_random_candidate_default_range() {
    let app = create_test_app().await;

    for _ in 0..10 {
        let (status, body) = get_json(app.clone(), "/api/v1/candidates/random").await;
        assert_eq!(status, StatusCode::OK);

        let mora_count = body["mora_count"].as_u64().unwrap();
        assert!((2..=10).contains(&mora_count));
    }
}

#[tokio::test]
async fn test_random_candidate_atamadaka() {
    let app = create_test_app().await;

    let (status, body) = get_json(app, "/api/v1/candidates/random?min_mora=4&max_mora=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "富士山");
    assert_eq!(body["accent_pattern"], json!([2, 1, 1, 1]));
    assert_eq!(body["accent_code"], "フ]ジサン");
}

#[tokio::test]
async fn test_random_candidate_not_found() {
    let app = create_test_app().await;

    let (status, body) = get_json(app, "/api/v1/candidates/random?min_mora=8&max_mora=10").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No candidate found");
}

#[tokio::test]
async fn test_random_candidate_inverted_range() {
    let app = create_test_app().await;

    let (status, _) = get_json(app, "/api/v1/candidates/random?min_mora=5&max_mora=2").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_candidate_bad_query() {
    let app = create_test_app().await;

    let (status, _) = get_json(app, "/api/v1/candidates/random?min_mora=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
