use super::{CandidateError, Result};
use pitchcraft_core::{PitchPattern, render_reading, segment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// NewType pattern for candidate row ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(i64);

impl CandidateId {
    /// Create from a stored row ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated practice word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Assigned by the store; `None` until inserted
    pub id: Option<CandidateId>,
    /// Surface text, unique within the store
    pub surface: String,
    pub reading: String,
    pub pattern: PitchPattern,
    /// Derived from the pattern
    pub mora_count: usize,
}

impl CandidateRecord {
    /// Create a record; the mora count follows the normalized pattern
    pub fn new(surface: impl Into<String>, reading: impl Into<String>, pattern: PitchPattern) -> Self {
        let mora_count = pattern.len();
        Self {
            id: None,
            surface: surface.into(),
            reading: reading.into(),
            pattern,
            mora_count,
        }
    }

    /// Same record with its stored ID
    pub fn with_id(mut self, id: CandidateId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check that the reading, pattern and mora count describe the same word
    pub fn validate(&self) -> Result<()> {
        let morae = segment(&self.reading).len();
        if self.pattern.len() != morae || self.mora_count != morae {
            return Err(CandidateError::InvalidRecord(format!(
                "'{}': reading {} has {} morae, pattern has {}, mora count is {}",
                self.surface,
                self.reading,
                morae,
                self.pattern.len(),
                self.mora_count
            )));
        }
        Ok(())
    }

    /// Bracket notation of the reading under the stored pattern
    pub fn notation(&self) -> String {
        render_reading(&self.reading, &self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchcraft_core::PitchLabel::{High, Low};

    #[test]
    fn test_new_derives_mora_count() {
        let record = CandidateRecord::new("箸", "ハシ", PitchPattern::new(vec![High, Low]));
        assert_eq!(record.mora_count, 2);
        assert_eq!(record.id, None);
        assert_eq!(record.notation(), "ハ]シ");
    }

    #[test]
    fn test_validate() {
        let record = CandidateRecord::new("桜", "サクラ", PitchPattern::new(vec![Low, High, High]));
        assert!(record.validate().is_ok());

        let short = CandidateRecord::new("桜", "サクラ", PitchPattern::new(vec![Low, High]));
        assert!(matches!(short.validate(), Err(CandidateError::InvalidRecord(_))));

        let mut miscounted = CandidateRecord::new("箸", "ハシ", PitchPattern::new(vec![High, Low]));
        miscounted.mora_count = 3;
        assert!(matches!(miscounted.validate(), Err(CandidateError::InvalidRecord(_))));
    }

    #[test]
    fn test_with_id() {
        let record = CandidateRecord::new("橋", "ハシ", PitchPattern::new(vec![Low, High]))
            .with_id(CandidateId::new(7));
        assert_eq!(record.id, Some(CandidateId::new(7)));
        assert_eq!(record.notation(), "ハ[シ");
    }
}
