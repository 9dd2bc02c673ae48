//! Error types for pitchcraft-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccentError {
    #[error("Unresolvable input: {0}")]
    UnresolvableInput(String),

    #[error("Accent model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Analyzer error: {0}")]
    Analyzer(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Invalid neural code: {0}")]
    InvalidNeuralCode(i64),

    #[error("Invalid accent kernel: {0}")]
    InvalidKernel(String),

    #[error("Invalid pitch level: {0}")]
    InvalidPitchLevel(u8),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, AccentError>;
