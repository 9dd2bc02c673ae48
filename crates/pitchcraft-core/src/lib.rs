//! # Pitchcraft Core Engine
//!
//! Accent resolution and notation for Japanese words: mora segmentation,
//! dictionary-kernel alignment, decoding of accent-model codes, length
//! normalization and bracket notation. Everything here is pure and
//! synchronous; external tokenizers, dictionaries and models are reached
//! only through the traits in [`collaborator`].

pub mod collaborator;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod mora;
pub mod normalize;
pub mod notation;
pub mod pitch;
pub mod romaji;

pub use collaborator::{
    AccentModel, LexicalAnalyzer, Morpheme, NOUN_TAG, Parse, Token, Tokenizer, TokenizerFactory,
};
pub use decoder::{DecoderState, NeuralCode, decode};
pub use engine::{AccentInput, ResolvedPattern, resolve_reading};
pub use error::{AccentError, Result};
pub use kernel::{AccentKernel, AccentType, align};
pub use mora::{Mora, mora_count, segment};
pub use normalize::normalize;
pub use notation::{render, render_reading};
pub use pitch::{PitchLabel, PitchPattern};
