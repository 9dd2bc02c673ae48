//! Error types for pitchcraft-cli

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] pitchcraft::PitchcraftError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] pitchcraft::AccentError),

    #[error("Candidate error: {0}")]
    Candidate(#[from] pitchcraft::CandidateError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
