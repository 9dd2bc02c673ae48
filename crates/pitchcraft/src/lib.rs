//! Pitchcraft application layer
//!
//! Connects the pure accent engine in `pitchcraft-core` to its collaborators
//! and persists practice candidates.

pub mod candidate;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod resolver;

// Re-export core types
pub use pitchcraft_core::{
    AccentError, AccentKernel, AccentType, Mora, NeuralCode, PitchLabel, PitchPattern, segment,
};

pub use candidate::{
    BuildSummary, CandidateError, CandidateRecord, CandidateRepository, CandidateService,
    FetchedCandidate, InMemoryCandidateRepository, SqliteCandidateRepository,
};
pub use config::{BuildConfig, PitchcraftConfig};
pub use error::{PitchcraftError, Result as PitchcraftResult};
pub use lexicon::{Lexicon, LexiconError, PredictionTable};
pub use resolver::{AccentResolver, Resolution, ResolutionSource};

use std::path::Path;
use std::sync::Arc;

/// Resolver over the configured lexicon and prediction files
pub fn resolver_from_config(config: &PitchcraftConfig) -> PitchcraftResult<AccentResolver> {
    let lexicon = Arc::new(Lexicon::load(Path::new(&config.lexicon_path))?);
    let model = Arc::new(PredictionTable::load(Path::new(&config.predictions_path))?);
    Ok(AccentResolver::new(lexicon.clone(), lexicon, model))
}
