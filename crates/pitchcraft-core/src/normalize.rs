//! Length reconciliation between a predicted pattern and the reading

use crate::pitch::{PitchLabel, PitchPattern};

/// Label used to pad an empty pattern
pub const DEFAULT_LABEL: PitchLabel = PitchLabel::Low;

/// Fit `pattern` to exactly `target_length` labels.
///
/// Longer patterns lose their tail. Shorter ones are extended by repeating
/// their last label (or [`DEFAULT_LABEL`] when empty), so a prediction cut
/// short never gains a fall it did not contain.
pub fn normalize(pattern: PitchPattern, target_length: usize) -> PitchPattern {
    let fill = pattern.last().unwrap_or(DEFAULT_LABEL);
    let mut labels = pattern.into_labels();
    labels.truncate(target_length);
    labels.resize(target_length, fill);
    PitchPattern::new(labels)
}
