//! Decoder for the accent model's boundary codes
//!
//! The model emits one transition code per position. A code describes what
//! happens *after* its position, so decoding carries a running pitch level:
//! the level is emitted first and only then updated by the code.

use crate::pitch::{PitchLabel, PitchPattern};
use crate::{AccentError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Per-position boundary code from the accent model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum NeuralCode {
    /// The next mora is low
    Fall,
    /// The next mora keeps the current level
    Continue,
    /// The next mora is high
    Rise,
}

impl NeuralCode {
    /// Numeric form used by the model output (0, 1, 2)
    pub fn code(self) -> i64 {
        match self {
            NeuralCode::Fall => 0,
            NeuralCode::Continue => 1,
            NeuralCode::Rise => 2,
        }
    }

    /// Map a whole numeric model output
    pub fn from_codes(codes: &[i64]) -> Result<Vec<NeuralCode>> {
        codes.iter().map(|&c| NeuralCode::try_from(c)).collect()
    }
}

impl TryFrom<i64> for NeuralCode {
    type Error = AccentError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(NeuralCode::Fall),
            1 => Ok(NeuralCode::Continue),
            2 => Ok(NeuralCode::Rise),
            other => Err(AccentError::InvalidNeuralCode(other)),
        }
    }
}

/// Running level of the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderState {
    level: PitchLabel,
}

impl DecoderState {
    /// Initial state: high only when the first mora itself is accented,
    /// i.e. the sequence opens with a fall
    pub fn initial(first: Option<NeuralCode>) -> Self {
        let level = match first {
            Some(NeuralCode::Fall) => PitchLabel::High,
            _ => PitchLabel::Low,
        };
        Self { level }
    }

    pub fn level(self) -> PitchLabel {
        self.level
    }

    /// Transition table
    pub fn next(self, code: NeuralCode) -> Self {
        let level = match (self.level, code) {
            (_, NeuralCode::Fall) => PitchLabel::Low,
            (_, NeuralCode::Rise) => PitchLabel::High,
            (level, NeuralCode::Continue) => level,
        };
        Self { level }
    }
}

/// Decode model codes into one label per consumed code.
///
/// The result may be shorter or longer than the reading's mora count;
/// callers normalize it afterwards.
pub fn decode(codes: &[NeuralCode]) -> PitchPattern {
    let mut state = DecoderState::initial(codes.first().copied());
    let mut labels = Vec::with_capacity(codes.len());

    for &code in codes {
        labels.push(state.level());
        state = state.next(code);
    }

    PitchPattern::new(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use NeuralCode::{Continue, Fall, Rise};
    use PitchLabel::{High, Low};

    #[test]
    fn test_fall_continue_rise() {
        let pattern = decode(&[Fall, Continue, Rise]);
        assert_eq!(pattern.labels(), &[High, Low, Low]);
    }

    #[test]
    fn test_rise_then_continue() {
        let pattern = decode(&[Rise, Continue, Continue]);
        assert_eq!(pattern.labels(), &[Low, High, High]);
    }

    #[test]
    fn test_rise_then_fall() {
        let pattern = decode(&[Rise, Fall, Continue]);
        assert_eq!(pattern.labels(), &[Low, High, Low]);
    }

    #[test]
    fn test_empty_codes() {
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let codes = [Rise, Continue, Fall, Rise, Continue];
        assert_eq!(decode(&codes), decode(&codes));
    }

    #[test]
    fn test_transition_table() {
        let low = DecoderState::initial(None);
        assert_eq!(low.level(), Low);
        assert_eq!(low.next(Continue).level(), Low);
        assert_eq!(low.next(Rise).level(), High);
        let high = low.next(Rise);
        assert_eq!(high.next(Continue).level(), High);
        assert_eq!(high.next(Fall).level(), Low);
        assert_eq!(DecoderState::initial(Some(Fall)).level(), High);
    }

    #[test]
    fn test_numeric_codes() {
        assert_eq!(
            NeuralCode::from_codes(&[0, 1, 2]).unwrap(),
            vec![Fall, Continue, Rise]
        );
        assert!(matches!(
            NeuralCode::try_from(3),
            Err(AccentError::InvalidNeuralCode(3))
        ));
        assert_eq!(Rise.code(), 2);
    }
}
