use pitchcraft::candidate::{
    CandidateError, CandidateRecord, CandidateRepository, CandidateService,
    SqliteCandidateRepository,
};
use pitchcraft::{PitchLabel, PitchPattern};
use std::sync::Arc;

async fn setup_test_db() -> SqliteCandidateRepository {
    dotenv::dotenv().ok();

    let database_url =
        std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    let repo = SqliteCandidateRepository::connect(&database_url)
        .await
        .expect("Failed to open database");

    // Clean up test data
    sqlx::query("DELETE FROM candidates")
        .execute(repo.pool())
        .await
        .expect("Failed to clean test data");

    repo
}

fn create_test_record(surface: &str, reading: &str, levels: &[u8]) -> CandidateRecord {
    CandidateRecord::new(surface, reading, PitchPattern::from_levels(levels).unwrap())
}

#[tokio::test]
async fn test_put_and_get() {
    let repo = setup_test_db().await;

    let inserted = repo
        .put(create_test_record("箸", "ハシ", &[2, 1]))
        .await
        .unwrap();
    assert!(inserted);

    let stored = repo.get_by_surface("箸").await.unwrap().unwrap();
    assert_eq!(stored.reading, "ハシ");
    assert_eq!(stored.mora_count, 2);
    assert_eq!(
        stored.pattern.labels(),
        &[PitchLabel::High, PitchLabel::Low]
    );
    assert!(stored.id.is_some());
    assert_eq!(stored.notation(), "ハ]シ");

    assert!(repo.get_by_surface("橋").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_put_is_ignored() {
    let repo = setup_test_db().await;

    assert!(repo.put(create_test_record("桜", "サクラ", &[1, 2, 2])).await.unwrap());
    assert!(!repo.put(create_test_record("桜", "サクラ", &[2, 1, 1])).await.unwrap());

    assert_eq!(repo.count().await.unwrap(), 1);
    let stored = repo.get_by_surface("桜").await.unwrap().unwrap();
    assert_eq!(stored.pattern.levels(), vec![1, 2, 2]);
}

#[tokio::test]
async fn test_pattern_is_stored_as_level_list() {
    let repo = setup_test_db().await;
    repo.put(create_test_record("雨", "アメ", &[2, 1]))
        .await
        .unwrap();

    let raw: String = sqlx::query_scalar("SELECT accent_pattern FROM candidates WHERE surface = ?1")
        .bind("雨")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(raw, "[2,1]");
}

#[tokio::test]
async fn test_sample_by_mora_range() {
    let repo = setup_test_db().await;
    repo.put(create_test_record("箸", "ハシ", &[2, 1])).await.unwrap();
    repo.put(create_test_record("桜", "サクラ", &[1, 2, 2])).await.unwrap();
    repo.put(create_test_record(
        "人工知能",
        "ジンコウチノウ",
        &[1, 2, 2, 2, 1, 1, 1],
    ))
    .await
    .unwrap();

    for _ in 0..20 {
        let record = repo.sample(3, 8).await.unwrap();
        assert!((3..=8).contains(&record.mora_count));
    }

    let record = repo.sample(2, 2).await.unwrap();
    assert_eq!(record.surface, "箸");

    let result = repo.sample(9, 10).await;
    assert!(matches!(result, Err(CandidateError::NotFound(_))));

    let result = repo.sample(5, 2).await;
    assert!(matches!(result, Err(CandidateError::NotFound(_))));
}

#[tokio::test]
async fn test_service_fetch_candidate() {
    let repo = setup_test_db().await;
    repo.put(create_test_record("桜", "サクラ", &[1, 2, 2])).await.unwrap();

    let service = CandidateService::new(Arc::new(repo));
    let fetched = service.fetch_candidate(2, 10).await.unwrap();
    assert_eq!(fetched.record.surface, "桜");
    assert_eq!(fetched.notation, "サ[クラ");
}

#[tokio::test]
async fn test_put_rejects_inconsistent_record() {
    let repo = setup_test_db().await;

    let result = repo.put(create_test_record("桜", "サクラ", &[1, 2])).await;
    assert!(matches!(result, Err(CandidateError::InvalidRecord(_))));

    let mut miscounted = create_test_record("箸", "ハシ", &[2, 1]);
    miscounted.mora_count = 3;
    let result = repo.put(miscounted).await;
    assert!(matches!(result, Err(CandidateError::InvalidRecord(_))));

    assert_eq!(repo.count().await.unwrap(), 0);
    let result = repo.sample(2, 3).await;
    assert!(matches!(result, Err(CandidateError::NotFound(_))));
}
