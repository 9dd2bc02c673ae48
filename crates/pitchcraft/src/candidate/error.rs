use thiserror::Error;

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("No candidate found: {0}")]
    NotFound(String),

    #[error("Invalid candidate record: {0}")]
    InvalidRecord(String),

    #[error("Resolution error: {0}")]
    Resolution(#[from] pitchcraft_core::AccentError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type Result<T> = std::result::Result<T, CandidateError>;
