//! Mora segmentation
//!
//! A reading is split left to right into morae. Small vowels and glides join
//! the character before them (キャ, ファ, クヮ); every other character,
//! including the geminate ッ, the moraic nasal ン and the long-vowel mark ー,
//! stands as a mora of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters that combine with the preceding character into one mora.
/// The geminate ッ is absent: it is counted as a mora (ガッコウ has four).
const COMBINING: &[char] = &[
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ヮ', // katakana
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'ゎ', // hiragana
];

/// Offset between a hiragana code point and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// One rhythmic unit of a reading
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mora {
    /// 0-based position within the reading
    pub index: usize,
    /// One or two characters of the reading
    pub text: String,
}

impl fmt::Display for Mora {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Whether `c` joins the preceding character into a single mora
pub fn is_combining(c: char) -> bool {
    COMBINING.contains(&c)
}

/// Split a reading into its morae.
///
/// Never fails: an empty reading yields an empty sequence, and concatenating
/// the mora texts always gives back the input.
pub fn segment(reading: &str) -> Vec<Mora> {
    let mut morae: Vec<Mora> = Vec::new();

    for c in reading.chars() {
        match morae.last_mut() {
            Some(last) if is_combining(c) && last.text.chars().count() == 1 => last.text.push(c),
            _ => morae.push(Mora {
                index: morae.len(),
                text: c.to_string(),
            }),
        }
    }

    morae
}

/// Number of morae in a reading
pub fn mora_count(reading: &str) -> usize {
    segment(reading).len()
}

/// Concatenate mora texts back into a reading
pub fn join(morae: &[Mora]) -> String {
    morae.iter().map(|m| m.text.as_str()).collect()
}

/// Convert hiragana to katakana, leaving every other character untouched
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}
