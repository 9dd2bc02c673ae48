use async_trait::async_trait;
use rand::seq::IteratorRandom;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{CandidateError, CandidateId, CandidateRecord, CandidateRepository, Result};

struct Records {
    by_surface: HashMap<String, CandidateRecord>,
    next_id: i64,
}

/// In-memory implementation of CandidateRepository
#[derive(Clone)]
pub struct InMemoryCandidateRepository {
    records: Arc<RwLock<Records>>,
}

impl InMemoryCandidateRepository {
    /// Create a new in-memory candidate repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Records {
                by_surface: HashMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryCandidateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn put(&self, record: CandidateRecord) -> Result<bool> {
        record.validate()?;
        let mut records = self.records.write().await;

        if records.by_surface.contains_key(&record.surface) {
            return Ok(false);
        }

        let id = CandidateId::new(records.next_id);
        records.next_id += 1;
        records
            .by_surface
            .insert(record.surface.clone(), record.with_id(id));
        Ok(true)
    }

    async fn sample(&self, min_mora: usize, max_mora: usize) -> Result<CandidateRecord> {
        let records = self.records.read().await;

        records
            .by_surface
            .values()
            .filter(|r| (min_mora..=max_mora).contains(&r.mora_count))
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| {
                CandidateError::NotFound(format!("mora count between {} and {}", min_mora, max_mora))
            })
    }

    async fn get_by_surface(&self, surface: &str) -> Result<Option<CandidateRecord>> {
        let records = self.records.read().await;
        Ok(records.by_surface.get(surface).cloned())
    }

    async fn count(&self) -> Result<usize> {
        let records = self.records.read().await;
        Ok(records.by_surface.len())
    }
}
