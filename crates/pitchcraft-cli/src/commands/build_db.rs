use crate::error::CliError;
use pitchcraft::candidate::load_seed_words;
use pitchcraft::{
    BuildSummary, CandidateService, PitchcraftConfig, SqliteCandidateRepository,
    resolver_from_config,
};
use std::sync::Arc;

/// Resolve the seed words and store the accepted ones
pub async fn run_build_db(config: &PitchcraftConfig) -> Result<BuildSummary, CliError> {
    let words = load_seed_words(&config.build)?;
    if words.is_empty() {
        return Err(CliError::InvalidInput(
            "no seed words: default seeds disabled and no seed file given".to_string(),
        ));
    }

    let resolver = resolver_from_config(config)?;
    let repository = SqliteCandidateRepository::connect(&config.database_url).await?;
    let service = CandidateService::new(Arc::new(repository));

    println!(
        "🔧 Building candidates from {} seed words into {}",
        words.len(),
        config.database_url
    );

    let summary = service.build(&words, &resolver, &config.build).await?;

    println!("✅ Build complete");
    println!("   examined:   {}", summary.examined);
    println!("   stored:     {}", summary.stored);
    println!("   duplicates: {}", summary.duplicates);
    println!("   skipped:    {}", summary.skipped);
    println!("   failed:     {}", summary.failed);
    println!("   total:      {}", service.count().await?);

    Ok(summary)
}
