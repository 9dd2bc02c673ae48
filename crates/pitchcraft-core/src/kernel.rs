//! Dictionary accent kernels and their alignment onto morae
//!
//! A kernel `K` means "pitch drops after mora K". The contour is first laid
//! out on the two-symbols-per-mora romanized form (see [`crate::romaji`]) and
//! then subsampled back to one label per mora.
//!
//! Both symbols of a mora always carry that mora's label; the symbols
//! themselves never affect the result. The doubled form only fixes the
//! indexing, so [`align_morae`] equals labelling each mora directly.

use crate::mora::{Mora, segment};
use crate::pitch::{PitchLabel, PitchPattern};
use crate::romaji::romanize;
use crate::{AccentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// Mora number after which the pitch falls (0 = no fall)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccentKernel(u32);

impl AccentKernel {
    pub const HEIBAN: AccentKernel = AccentKernel(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Read the kernel out of a raw dictionary `acc` field.
    ///
    /// The field may list several comma-separated candidates for ambiguous
    /// headwords; only the first is used. Returns `None` when the field is
    /// empty or its first candidate is not a plain number, in which case the
    /// caller falls back to the accent model.
    pub fn from_dictionary_field(raw: &str) -> Option<Self> {
        let mut candidates = raw.split(',').map(str::trim);
        let first = candidates.next()?;
        let rest: Vec<&str> = candidates.collect();
        if !rest.is_empty() {
            debug!(
                "Ambiguous accent kernel '{}', using first candidate '{}'",
                raw, first
            );
        }
        first.parse().ok()
    }

    /// Kernel clamped to the word: anything at or past the last mora never
    /// falls inside the word and is treated like 0
    pub fn effective(self, mora_count: usize) -> u32 {
        if self.0 as usize >= mora_count { 0 } else { self.0 }
    }

    /// Classify this kernel for a word of `mora_count` morae
    pub fn accent_type(self, mora_count: usize) -> AccentType {
        match self.0 as usize {
            0 => AccentType::Heiban,
            1 => AccentType::Atamadaka,
            k if k >= mora_count => AccentType::Odaka,
            _ => AccentType::Nakadaka,
        }
    }
}

impl FromStr for AccentKernel {
    type Err = AccentError;

    /// Strict parse: digits only, no candidate list
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(AccentError::InvalidKernel(s.to_string()));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| AccentError::InvalidKernel(s.to_string()))
    }
}

impl fmt::Display for AccentKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named accent classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccentType {
    /// No fall inside the word or right after it
    Heiban,
    /// Falls right after the first mora
    Atamadaka,
    /// Falls after an inner mora
    Nakadaka,
    /// Falls right after the last mora
    Odaka,
}

fn label_for(mora_index: usize, mora_count: usize, kernel: u32) -> PitchLabel {
    if mora_count == 1 {
        return PitchLabel::High;
    }
    let position = mora_index + 1;
    match kernel {
        0 => {
            if position == 1 {
                PitchLabel::Low
            } else {
                PitchLabel::High
            }
        }
        1 => {
            if position == 1 {
                PitchLabel::High
            } else {
                PitchLabel::Low
            }
        }
        k => {
            if (2..=k as usize).contains(&position) {
                PitchLabel::High
            } else {
                PitchLabel::Low
            }
        }
    }
}

/// Contour at doubled resolution: one label per romanized symbol, repeated
/// for both symbols of a mora
pub fn align_doubled(morae: &[Mora], kernel: AccentKernel) -> Vec<PitchLabel> {
    let mora_count = morae.len();
    let kernel = kernel.effective(mora_count);

    romanize(morae)
        .iter()
        .enumerate()
        .flat_map(|(index, pair)| {
            let label = label_for(index, mora_count, kernel);
            pair.iter().map(move |_| label)
        })
        .collect()
}

/// Per-mora pattern for already segmented morae
pub fn align_morae(morae: &[Mora], kernel: AccentKernel) -> PitchPattern {
    align_doubled(morae, kernel).into_iter().step_by(2).collect()
}

/// Per-mora pattern of `reading` under `kernel`
pub fn align(reading: &str, kernel: AccentKernel) -> PitchPattern {
    align_morae(&segment(reading), kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mora::mora_count;
    use PitchLabel::{High, Low};

    fn pattern(s: &str) -> PitchPattern {
        s.chars()
            .map(|c| if c == 'H' { High } else { Low })
            .collect()
    }

    #[test]
    fn test_heiban() {
        assert_eq!(align("ハシ", AccentKernel::new(0)), pattern("LH"));
        assert_eq!(align("サクラ", AccentKernel::new(0)), pattern("LHH"));
    }

    #[test]
    fn test_atamadaka() {
        assert_eq!(align("ハシ", AccentKernel::new(1)), pattern("HL"));
        assert_eq!(align("イノチ", AccentKernel::new(1)), pattern("HLL"));
    }

    #[test]
    fn test_nakadaka() {
        assert_eq!(align("ココロ", AccentKernel::new(2)), pattern("LHL"));
        assert_eq!(align("ミズウミ", AccentKernel::new(3)), pattern("LHHL"));
    }

    #[test]
    fn test_odaka_matches_heiban_inside_word() {
        for reading in ["ハシ", "オトウト", "キョウト"] {
            let n = mora_count(reading) as u32;
            let heiban = align(reading, AccentKernel::new(0));
            assert_eq!(align(reading, AccentKernel::new(n)), heiban);
            assert_eq!(align(reading, AccentKernel::new(n + 3)), heiban);
        }
    }

    #[test]
    fn test_single_mora_is_high() {
        assert_eq!(align("エ", AccentKernel::new(0)), pattern("H"));
        assert_eq!(align("ヒ", AccentKernel::new(1)), pattern("H"));
    }

    #[test]
    fn test_palatalized_morae_align_per_mora() {
        // キョ|ウ|ト, kernel 1
        assert_eq!(align("キョウト", AccentKernel::new(1)), pattern("HLL"));
        // ト|ウ|キョ|ウ, heiban
        assert_eq!(align("トウキョウ", AccentKernel::new(0)), pattern("LHHH"));
        // シャ|シ|ン, kernel 0
        assert_eq!(align("シャシン", AccentKernel::new(0)), pattern("LHH"));
    }

    #[test]
    fn test_doubled_resolution_is_two_per_mora() {
        let morae = segment("ジンコウチノウ");
        let doubled = align_doubled(&morae, AccentKernel::new(4));
        assert_eq!(doubled.len(), morae.len() * 2);
        let s: String = doubled.iter().map(|l| l.as_char()).collect();
        assert_eq!(s, "LLHHHHHHLLLLLL");
    }

    #[test]
    fn test_both_symbols_of_a_mora_share_its_label() {
        let morae = segment("ホッカイドウ");
        for k in 0..=6 {
            let doubled = align_doubled(&morae, AccentKernel::new(k));
            assert!(doubled.chunks(2).all(|pair| pair[0] == pair[1]));

            let odd: PitchPattern = doubled.iter().copied().skip(1).step_by(2).collect();
            assert_eq!(odd, align_morae(&morae, AccentKernel::new(k)));
        }
    }

    #[test]
    fn test_length_matches_mora_count() {
        for reading in ["", "ア", "ハシ", "ガッコウ", "ニュウジョウケン"] {
            let n = mora_count(reading);
            for k in 0..=n as u32 {
                assert_eq!(align(reading, AccentKernel::new(k)).len(), n);
            }
        }
    }

    #[test]
    fn test_from_dictionary_field() {
        assert_eq!(
            AccentKernel::from_dictionary_field("2"),
            Some(AccentKernel::new(2))
        );
        assert_eq!(
            AccentKernel::from_dictionary_field("0,2"),
            Some(AccentKernel::new(0))
        );
        assert_eq!(AccentKernel::from_dictionary_field(""), None);
        assert_eq!(AccentKernel::from_dictionary_field("*"), None);
        assert_eq!(AccentKernel::from_dictionary_field("-1"), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("3".parse::<AccentKernel>().unwrap(), AccentKernel::new(3));
        assert!(matches!(
            "1,2".parse::<AccentKernel>(),
            Err(AccentError::InvalidKernel(_))
        ));
        assert!("+1".parse::<AccentKernel>().is_err());
    }

    #[test]
    fn test_accent_type() {
        assert_eq!(AccentKernel::new(0).accent_type(2), AccentType::Heiban);
        assert_eq!(AccentKernel::new(1).accent_type(2), AccentType::Atamadaka);
        assert_eq!(AccentKernel::new(2).accent_type(3), AccentType::Nakadaka);
        assert_eq!(AccentKernel::new(3).accent_type(3), AccentType::Odaka);
        assert_eq!(AccentType::Odaka.to_string(), "odaka");
    }
}
