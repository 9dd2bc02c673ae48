use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid lexicon line {line}: {message}")]
    InvalidLine { line: usize, message: String },

    #[error("Duplicate lexicon entry: {0}")]
    DuplicateEntry(String),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
