//! Error types for pitchcraft crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchcraftError {
    #[error("Core error: {0}")]
    Core(#[from] pitchcraft_core::AccentError),

    #[error("Candidate error: {0}")]
    Candidate(#[from] crate::candidate::CandidateError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] crate::lexicon::LexiconError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PitchcraftError>;
