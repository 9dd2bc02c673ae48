use async_trait::async_trait;
use pitchcraft_core::PitchPattern;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::str::FromStr;
use tracing::debug;

use super::{CandidateError, CandidateId, CandidateRecord, CandidateRepository, Result};

/// SQLite implementation of CandidateRepository
#[derive(Clone)]
pub struct SqliteCandidateRepository {
    pool: SqlitePool,
}

impl SqliteCandidateRepository {
    /// Create a new SqliteCandidateRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and apply
    /// migrations
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| CandidateError::DatabaseError(e.to_string()))?
            .create_if_missing(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        // Every connection to `:memory:` is its own database, so keep exactly one alive.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| CandidateError::DatabaseError(e.to_string()))?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| CandidateError::DatabaseError(e.to_string()))
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_record(row: &SqliteRow) -> Result<CandidateRecord> {
    let pattern_json: String = row.get("accent_pattern");
    let pattern = PitchPattern::from_json(&pattern_json)
        .map_err(|e| CandidateError::InvalidRecord(format!("Invalid accent pattern: {}", e)))?;

    let mora_count: i64 = row.get("mora_count");
    if mora_count < 0 || mora_count as usize != pattern.len() {
        return Err(CandidateError::InvalidRecord(format!(
            "mora count {} does not match pattern {}",
            mora_count, pattern_json
        )));
    }

    Ok(CandidateRecord {
        id: Some(CandidateId::new(row.get("id"))),
        surface: row.get("surface"),
        reading: row.get("reading"),
        pattern,
        mora_count: mora_count as usize,
    })
}

#[async_trait]
impl CandidateRepository for SqliteCandidateRepository {
    async fn put(&self, record: CandidateRecord) -> Result<bool> {
        record.validate()?;

        let pattern_json = record
            .pattern
            .to_json()
            .map_err(|e| CandidateError::SerializationError(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO candidates (surface, reading, accent_pattern, mora_count)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&record.surface)
        .bind(&record.reading)
        .bind(&pattern_json)
        .bind(record.mora_count as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| CandidateError::DatabaseError(e.to_string()))?;

        let inserted = result.rows_affected() > 0;
        if !inserted {
            debug!("Candidate '{}' already stored", record.surface);
        }
        Ok(inserted)
    }

    async fn sample(&self, min_mora: usize, max_mora: usize) -> Result<CandidateRecord> {
        let not_found =
            || CandidateError::NotFound(format!("mora count between {} and {}", min_mora, max_mora));

        if min_mora > max_mora {
            return Err(not_found());
        }

        let row = sqlx::query(
            r#"
            SELECT id, surface, reading, accent_pattern, mora_count
            FROM candidates
            WHERE mora_count BETWEEN ?1 AND ?2
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(min_mora as i64)
        .bind(max_mora as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CandidateError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => row_to_record(&row),
            None => Err(not_found()),
        }
    }

    async fn get_by_surface(&self, surface: &str) -> Result<Option<CandidateRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, surface, reading, accent_pattern, mora_count
            FROM candidates
            WHERE surface = ?1
            "#,
        )
        .bind(surface)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CandidateError::DatabaseError(e.to_string()))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM candidates")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CandidateError::DatabaseError(e.to_string()))?
            .get("count");

        Ok(count as usize)
    }
}
