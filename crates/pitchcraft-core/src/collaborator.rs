//! Contracts for the external collaborators
//!
//! The engine never tokenizes, looks up dictionaries or runs inference on its
//! own. These traits describe what it expects from the components that do,
//! so real backends and test fakes plug in the same way.

use crate::Result;
use crate::decoder::NeuralCode;
use serde::{Deserialize, Serialize};

/// Part-of-speech head used by the tokenizer for nouns
pub const NOUN_TAG: &str = "名詞";

/// One token from morphological analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Reading of the token in phonemic (katakana) script
    pub reading_form: String,
    /// Part-of-speech fields, most general first
    pub part_of_speech: Vec<String>,
}

impl Token {
    pub fn new(reading_form: impl Into<String>, part_of_speech: Vec<String>) -> Self {
        Self {
            reading_form: reading_form.into(),
            part_of_speech,
        }
    }

    /// Whether the tokenizer classified this token as a noun
    pub fn is_noun(&self) -> bool {
        self.part_of_speech
            .first()
            .is_some_and(|head| head == NOUN_TAG)
    }
}

/// A tokenizer handle.
///
/// Handles are single-user: tokenizing takes `&mut self` and a handle must
/// not be shared between concurrent callers. Obtain a fresh one per call
/// from a [`TokenizerFactory`].
pub trait Tokenizer: Send {
    fn tokenize(&mut self, text: &str) -> Result<Vec<Token>>;
}

/// Creates fresh tokenizer handles
pub trait TokenizerFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn Tokenizer>>;
}

/// One morpheme of a lexical parse
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub reading: String,
    /// Raw accent-kernel field, possibly a comma-separated candidate list
    pub acc: Option<String>,
    /// Raw accent-combination field
    pub concat: Option<String>,
}

/// One ranked analysis of a surface/reading pair
pub type Parse = Vec<Morpheme>;

/// Dictionary-backed lexical analysis
pub trait LexicalAnalyzer: Send + Sync {
    /// Ranked parses for `surface` read as `reading`, best first.
    /// An empty result means the pair could not be analyzed.
    fn lookup(&self, surface: &str, reading: &str) -> Result<Vec<Parse>>;
}

/// The fallback accent model
pub trait AccentModel: Send + Sync {
    /// Boundary codes for a parsed word, one per predicted position
    fn infer(&self, parse: &[Morpheme], reading: &str) -> Result<Vec<NeuralCode>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_detection() {
        let noun = Token::new("ハシ", vec!["名詞".to_string(), "普通名詞".to_string()]);
        assert!(noun.is_noun());

        let verb = Token::new("タベル", vec!["動詞".to_string()]);
        assert!(!verb.is_noun());

        let untagged = Token::new("ア", vec![]);
        assert!(!untagged.is_noun());
    }
}
