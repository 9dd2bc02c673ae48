//! Accent resolution for surface text
//!
//! [`AccentResolver`] wires the collaborators (tokenizer, lexical analyzer,
//! accent model) to the core engine. It is built once and shared; every call
//! to [`AccentResolver::resolve`] takes its own tokenizer handle.

use pitchcraft_core::mora::to_katakana;
use pitchcraft_core::{
    AccentError, AccentInput, AccentKernel, AccentModel, AccentType, LexicalAnalyzer, Mora,
    Morpheme, PitchPattern, Result, Token, TokenizerFactory, resolve_reading,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::IntoStaticStr;
use tracing::debug;

/// Which path produced a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionSource {
    Dictionary {
        kernel: AccentKernel,
        accent_type: AccentType,
    },
    Model,
}

impl ResolutionSource {
    /// "dictionary" or "model"
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Result of resolving one surface text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub text: String,
    pub reading: String,
    pub morae: Vec<Mora>,
    pub pattern: PitchPattern,
    pub notation: String,
    pub source: ResolutionSource,
    /// Tokenizer output the reading was assembled from
    pub tokens: Vec<Token>,
}

impl Resolution {
    pub fn mora_count(&self) -> usize {
        self.morae.len()
    }

    /// Whether the text is a single token tagged as a noun
    pub fn is_single_noun(&self) -> bool {
        matches!(self.tokens.as_slice(), [token] if token.is_noun())
    }
}

/// Shared resolution context
#[derive(Clone)]
pub struct AccentResolver {
    tokenizers: Arc<dyn TokenizerFactory>,
    analyzer: Arc<dyn LexicalAnalyzer>,
    model: Arc<dyn AccentModel>,
}

impl AccentResolver {
    pub fn new(
        tokenizers: Arc<dyn TokenizerFactory>,
        analyzer: Arc<dyn LexicalAnalyzer>,
        model: Arc<dyn AccentModel>,
    ) -> Self {
        Self {
            tokenizers,
            analyzer,
            model,
        }
    }

    /// Tokenize with a fresh handle
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut handle = self.tokenizers.create()?;
        handle.tokenize(text)
    }

    /// Resolve the pitch pattern of `text`
    pub fn resolve(&self, text: &str) -> Result<Resolution> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AccentError::UnresolvableInput("empty input".to_string()));
        }

        let tokens = self.tokenize(text)?;
        let reading: String = tokens
            .iter()
            .map(|token| to_katakana(&token.reading_form))
            .collect();
        if reading.is_empty() {
            return Err(AccentError::UnresolvableInput(format!(
                "no reading for '{}'",
                text
            )));
        }

        let parses = self.analyzer.lookup(text, &reading)?;
        let Some(best) = parses.into_iter().next() else {
            return Err(AccentError::UnresolvableInput(format!(
                "no lexical analysis for '{}' ({})",
                text, reading
            )));
        };

        let (input, kernel) = match dictionary_kernel(&best) {
            Some(kernel) => (AccentInput::Kernel(kernel), Some(kernel)),
            None => {
                debug!(
                    "Falling back to accent model for '{}' ({} morphemes)",
                    text,
                    best.len()
                );
                let codes = self.model.infer(&best, &reading)?;
                (AccentInput::Codes(codes), None)
            }
        };

        let resolved = resolve_reading(&reading, &input);
        let source = match kernel {
            Some(kernel) => ResolutionSource::Dictionary {
                kernel,
                accent_type: kernel.accent_type(resolved.mora_count()),
            },
            None => ResolutionSource::Model,
        };

        debug!(
            "Resolved '{}' as {} via {}",
            text,
            resolved.notation,
            source.label()
        );

        Ok(Resolution {
            text: text.to_string(),
            reading,
            morae: resolved.morae,
            pattern: resolved.pattern,
            notation: resolved.notation,
            source,
            tokens,
        })
    }
}

/// Kernel of a single-morpheme parse; compounds never use the dictionary
fn dictionary_kernel(parse: &[Morpheme]) -> Option<AccentKernel> {
    match parse {
        [morpheme] => morpheme
            .acc
            .as_deref()
            .and_then(AccentKernel::from_dictionary_field),
        _ => None,
    }
}
