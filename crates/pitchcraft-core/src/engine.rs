//! Pattern resolution for a single reading
//!
//! Both the dictionary path and the model path end here: the raw labels are
//! fitted to the reading's mora count and rendered.

use crate::decoder::{NeuralCode, decode};
use crate::kernel::{AccentKernel, align_morae};
use crate::mora::{Mora, segment};
use crate::normalize::normalize;
use crate::notation::render;
use crate::pitch::PitchPattern;
use serde::{Deserialize, Serialize};

/// Where the raw labels come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccentInput {
    /// A dictionary kernel
    Kernel(AccentKernel),
    /// Boundary codes from the accent model
    Codes(Vec<NeuralCode>),
}

/// Normalized pattern of a reading with its notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPattern {
    pub morae: Vec<Mora>,
    pub pattern: PitchPattern,
    pub notation: String,
}

impl ResolvedPattern {
    pub fn mora_count(&self) -> usize {
        self.morae.len()
    }
}

/// Resolve `reading` under `input`; always yields one label per mora
pub fn resolve_reading(reading: &str, input: &AccentInput) -> ResolvedPattern {
    let morae = segment(reading);
    let raw = match input {
        AccentInput::Kernel(kernel) => align_morae(&morae, *kernel),
        AccentInput::Codes(codes) => decode(codes),
    };
    let pattern = normalize(raw, morae.len());
    let notation = render(&morae, &pattern);

    ResolvedPattern {
        morae,
        pattern,
        notation,
    }
}
