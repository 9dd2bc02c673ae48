use super::{CandidateRecord, Result};
use async_trait::async_trait;

/// Repository trait for practice candidates
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Insert a record unless its surface text is already stored.
    ///
    /// Returns whether a row was written; a duplicate is not an error.
    /// Records whose reading, pattern and mora count disagree are rejected
    /// with `InvalidRecord`.
    async fn put(&self, record: CandidateRecord) -> Result<bool>;

    /// One record chosen uniformly at random among those with
    /// `min_mora <= mora_count <= max_mora`.
    ///
    /// Fails with `CandidateError::NotFound` when none qualifies.
    async fn sample(&self, min_mora: usize, max_mora: usize) -> Result<CandidateRecord>;

    /// Get a record by surface text
    async fn get_by_surface(&self, surface: &str) -> Result<Option<CandidateRecord>>;

    /// Number of stored records
    async fn count(&self) -> Result<usize>;
}
