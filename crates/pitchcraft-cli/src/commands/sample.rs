use crate::error::CliError;
use pitchcraft::{CandidateService, FetchedCandidate, PitchcraftConfig, SqliteCandidateRepository};
use std::sync::Arc;

/// Print one random candidate with `min_mora..=max_mora` morae
pub async fn run_sample(
    config: &PitchcraftConfig,
    min_mora: usize,
    max_mora: usize,
) -> Result<FetchedCandidate, CliError> {
    let repository = SqliteCandidateRepository::connect(&config.database_url).await?;
    let service = CandidateService::new(Arc::new(repository));

    let fetched = service.fetch_candidate(min_mora, max_mora).await?;
    let record = &fetched.record;
    println!(
        "{}\t{}\t{}\t{} morae",
        record.surface, record.reading, fetched.notation, record.mora_count
    );

    Ok(fetched)
}
