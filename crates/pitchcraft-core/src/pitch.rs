//! Pitch labels and patterns

use crate::{AccentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Pitch of a single mora.
///
/// Stored and exchanged as its level number: 1 for low, 2 for high.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(into = "u8", try_from = "u8")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PitchLabel {
    Low,
    High,
}

impl PitchLabel {
    /// Numeric level used in stored patterns
    pub fn level(self) -> u8 {
        match self {
            PitchLabel::Low => 1,
            PitchLabel::High => 2,
        }
    }

    /// Single-letter form (`L` / `H`)
    pub fn as_char(self) -> char {
        match self {
            PitchLabel::Low => 'L',
            PitchLabel::High => 'H',
        }
    }
}

impl From<PitchLabel> for u8 {
    fn from(label: PitchLabel) -> Self {
        label.level()
    }
}

impl TryFrom<u8> for PitchLabel {
    type Error = AccentError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(PitchLabel::Low),
            2 => Ok(PitchLabel::High),
            other => Err(AccentError::InvalidPitchLevel(other)),
        }
    }
}

/// Ordered pitch labels, one per mora once normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchPattern(Vec<PitchLabel>);

impl PitchPattern {
    pub fn new(labels: Vec<PitchLabel>) -> Self {
        Self(labels)
    }

    /// Build from stored level numbers (1 = low, 2 = high)
    pub fn from_levels(levels: &[u8]) -> Result<Self> {
        levels
            .iter()
            .map(|&level| PitchLabel::try_from(level))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Level numbers, as exposed over the wire
    pub fn levels(&self) -> Vec<u8> {
        self.0.iter().map(|label| label.level()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> &[PitchLabel] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<PitchLabel> {
        self.0.get(index).copied()
    }

    pub fn first(&self) -> Option<PitchLabel> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<PitchLabel> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchLabel> + '_ {
        self.0.iter().copied()
    }

    pub fn into_labels(self) -> Vec<PitchLabel> {
        self.0
    }

    /// Serialized form kept in the candidate store, e.g. `[1,2,2]`
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AccentError::Serialization(format!("Failed to serialize pattern: {}", e)))
    }

    /// Parse the stored form; tolerates whitespace such as `[1, 2, 2]`
    pub fn from_json(raw: &str) -> Result<Self> {
        let levels: Vec<u8> = serde_json::from_str(raw).map_err(|e| {
            AccentError::Serialization(format!("Failed to parse pattern '{}': {}", raw, e))
        })?;
        Self::from_levels(&levels)
    }
}

impl From<Vec<PitchLabel>> for PitchPattern {
    fn from(labels: Vec<PitchLabel>) -> Self {
        Self(labels)
    }
}

impl FromIterator<PitchLabel> for PitchPattern {
    fn from_iter<I: IntoIterator<Item = PitchLabel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for PitchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.0 {
            write!(f, "{}", label.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PitchLabel::{High, Low};

    #[test]
    fn test_levels_round_trip() {
        let pattern = PitchPattern::new(vec![Low, High, High]);
        assert_eq!(pattern.levels(), vec![1, 2, 2]);
        assert_eq!(PitchPattern::from_levels(&[1, 2, 2]).unwrap(), pattern);
    }

    #[test]
    fn test_invalid_level() {
        let result = PitchPattern::from_levels(&[1, 3]);
        assert!(matches!(result, Err(AccentError::InvalidPitchLevel(3))));
    }

    #[test]
    fn test_json_form() {
        let pattern = PitchPattern::new(vec![High, Low]);
        assert_eq!(pattern.to_json().unwrap(), "[2,1]");
        assert_eq!(PitchPattern::from_json("[2, 1]").unwrap(), pattern);
        assert!(PitchPattern::from_json("not a list").is_err());
    }

    #[test]
    fn test_display() {
        let pattern = PitchPattern::new(vec![Low, High, Low]);
        assert_eq!(pattern.to_string(), "LHL");
        assert_eq!(High.to_string(), "HIGH");
        assert_eq!("LOW".parse::<PitchLabel>().unwrap(), Low);
    }
}
