//! File-backed collaborators
//!
//! A tab-separated lexicon stands in for the morphological tokenizer and the
//! accent dictionary, and a JSON table of precomputed outputs stands in for
//! the accent model.

pub mod dictionary;
pub mod error;
pub mod predictions;

pub use dictionary::{Lexicon, LexiconEntry, LexiconTokenizer, UNKNOWN_TAG};
pub use error::{LexiconError, Result};
pub use predictions::{Prediction, PredictionTable};
