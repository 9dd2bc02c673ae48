//! Bracket notation for pitch patterns
//!
//! `[` opens before a mora where pitch rises from the previous one; `]`
//! closes after a high mora followed by a low one. A rise is never marked on
//! the first mora, and a high run reaching the end of the word stays open.

use crate::mora::{Mora, segment};
use crate::pitch::{PitchLabel, PitchPattern};

pub const RISE_MARK: char = '[';
pub const FALL_MARK: char = ']';

/// Render morae and their labels as a display string, e.g. `ハ[シ`.
///
/// Pairs morae with labels position by position; extra entries on either
/// side are ignored.
pub fn render(morae: &[Mora], pattern: &PitchPattern) -> String {
    let labels = pattern.labels();
    let length = morae.len().min(labels.len());
    let mut out = String::new();

    for (i, mora) in morae.iter().take(length).enumerate() {
        let high = labels[i] == PitchLabel::High;

        if high && i > 0 && labels[i - 1] == PitchLabel::Low {
            out.push(RISE_MARK);
        }
        out.push_str(&mora.text);
        if high && i + 1 < length && labels[i + 1] == PitchLabel::Low {
            out.push(FALL_MARK);
        }
    }

    out
}

/// Segment `reading` and render it under `pattern`
pub fn render_reading(reading: &str, pattern: &PitchPattern) -> String {
    render(&segment(reading), pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{AccentKernel, align};
    use PitchLabel::{High, Low};

    #[test]
    fn test_rising_stays_open() {
        let pattern = PitchPattern::new(vec![Low, High]);
        assert_eq!(render_reading("ハシ", &pattern), "ハ[シ");
    }

    #[test]
    fn test_immediate_fall() {
        let pattern = PitchPattern::new(vec![High, Low]);
        assert_eq!(render_reading("ハシ", &pattern), "ハ]シ");
    }

    #[test]
    fn test_rise_then_fall() {
        let pattern = align("ミズウミ", AccentKernel::new(3));
        assert_eq!(render_reading("ミズウミ", &pattern), "ミ[ズウ]ミ");
    }

    #[test]
    fn test_palatalized_mora_kept_whole() {
        let pattern = align("トウキョウ", AccentKernel::new(0));
        assert_eq!(render_reading("トウキョウ", &pattern), "ト[ウキョウ");
    }

    #[test]
    fn test_never_opens_at_start() {
        for levels in [[2u8, 2, 2], [2, 1, 2], [2, 2, 1]] {
            let pattern = PitchPattern::from_levels(&levels).unwrap();
            assert!(!render_reading("アイウ", &pattern).starts_with(RISE_MARK));
        }
    }

    #[test]
    fn test_high_run_at_end_is_not_closed() {
        let pattern = PitchPattern::new(vec![Low, High, High]);
        let rendered = render_reading("サクラ", &pattern);
        assert_eq!(rendered, "サ[クラ");
        assert!(!rendered.ends_with(FALL_MARK));
    }

    #[test]
    fn test_all_low_and_all_high() {
        let low = PitchPattern::new(vec![Low, Low]);
        assert_eq!(render_reading("アメ", &low), "アメ");
        let high = PitchPattern::new(vec![High, High]);
        assert_eq!(render_reading("アメ", &high), "アメ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], &PitchPattern::default()), "");
    }
}
