use super::{CandidateRecord, CandidateRepository, DEFAULT_SEEDS, Result};
use crate::config::BuildConfig;
use crate::resolver::AccentResolver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A sampled candidate together with its notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedCandidate {
    pub record: CandidateRecord,
    pub notation: String,
}

/// Outcome counts of a candidate build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Distinct words looked at
    pub examined: usize,
    /// Newly written records
    pub stored: usize,
    /// Words already present in the store
    pub duplicates: usize,
    /// Words rejected by the noun or mora-count filter
    pub skipped: usize,
    /// Words that could not be resolved
    pub failed: usize,
}

/// Service for the practice candidate store
#[derive(Clone)]
pub struct CandidateService {
    repository: Arc<dyn CandidateRepository>,
}

impl CandidateService {
    /// Create a new CandidateService
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self { repository }
    }

    /// A random candidate with `min_mora <= mora_count <= max_mora`
    pub async fn fetch_candidate(&self, min_mora: usize, max_mora: usize) -> Result<FetchedCandidate> {
        let record = self
            .repository
            .sample(min_mora, max_mora)
            .await
            .inspect_err(|e| debug!("Sample {}..={} missed: {}", min_mora, max_mora, e))?;
        let notation = record.notation();
        Ok(FetchedCandidate { record, notation })
    }

    /// Number of stored candidates
    pub async fn count(&self) -> Result<usize> {
        self.repository.count().await
    }

    /// Resolve `words` and store the ones that pass the filters.
    ///
    /// Words that fail to resolve or are filtered out only show up in the
    /// summary; storage failures abort the build.
    pub async fn build<I, S>(
        &self,
        words: I,
        resolver: &AccentResolver,
        config: &BuildConfig,
    ) -> Result<BuildSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let mut summary = BuildSummary::default();
        info!("Building candidates from {} words", words.len());

        for word in &words {
            summary.examined += 1;

            let resolution = match resolver.resolve(word) {
                Ok(resolution) => resolution,
                Err(e) => {
                    warn!("Failed to resolve '{}': {}", word, e);
                    summary.failed += 1;
                    continue;
                }
            };

            if !resolution.is_single_noun() {
                debug!("Skipping '{}': not a single noun token", word);
                summary.skipped += 1;
                continue;
            }

            if !config.accepts(resolution.mora_count()) {
                debug!(
                    "Skipping '{}': {} morae outside {}..={}",
                    word,
                    resolution.mora_count(),
                    config.min_mora,
                    config.max_mora
                );
                summary.skipped += 1;
                continue;
            }

            let record = CandidateRecord::new(
                resolution.text,
                resolution.reading,
                resolution.pattern,
            );
            if self.repository.put(record).await? {
                debug!("Stored '{}' as {}", word, resolution.notation);
                summary.stored += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        info!(
            "Build finished: {} examined, {} stored, {} duplicates, {} skipped, {} failed",
            summary.examined, summary.stored, summary.duplicates, summary.skipped, summary.failed
        );
        Ok(summary)
    }
}

/// Seed words for a build: the built-in list (unless disabled) plus the
/// configured seed file, one word per line with `#` comments
pub fn load_seed_words(config: &BuildConfig) -> Result<Vec<String>> {
    let mut words: Vec<String> = if config.include_default_seeds {
        DEFAULT_SEEDS.iter().map(|w| w.to_string()).collect()
    } else {
        Vec::new()
    };

    if let Some(seed_path) = &config.seed_path {
        let content = std::fs::read_to_string(Path::new(seed_path))?;
        words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }

    Ok(words)
}
