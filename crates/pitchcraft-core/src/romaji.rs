//! Two-symbol romanization of morae
//!
//! Dictionary kernels are aligned on a doubled-resolution form where every
//! mora is written as an onset symbol followed by a nucleus symbol. Only the
//! symbol count and the mora boundaries matter to the aligner; the symbols
//! themselves keep the form readable in golden tests.

use crate::mora::{Mora, to_katakana};

/// Onset for morae without a consonant
pub const NO_ONSET: char = '_';
/// Symbol pair for characters outside the table
pub const UNKNOWN: [char; 2] = ['?', '?'];

const MORAIC_NASAL: [char; 2] = ['N', 'N'];
const GEMINATE: [char; 2] = ['Q', 'Q'];

/// kana, onset, nucleus
#[rustfmt::skip]
const KANA_TABLE: &[(char, char, char)] = &[
    ('ア', '_', 'a'), ('イ', '_', 'i'), ('ウ', '_', 'u'), ('エ', '_', 'e'), ('オ', '_', 'o'),
    ('ァ', '_', 'a'), ('ィ', '_', 'i'), ('ゥ', '_', 'u'), ('ェ', '_', 'e'), ('ォ', '_', 'o'),
    ('カ', 'k', 'a'), ('キ', 'k', 'i'), ('ク', 'k', 'u'), ('ケ', 'k', 'e'), ('コ', 'k', 'o'),
    ('ガ', 'g', 'a'), ('ギ', 'g', 'i'), ('グ', 'g', 'u'), ('ゲ', 'g', 'e'), ('ゴ', 'g', 'o'),
    ('サ', 's', 'a'), ('シ', 's', 'i'), ('ス', 's', 'u'), ('セ', 's', 'e'), ('ソ', 's', 'o'),
    ('ザ', 'z', 'a'), ('ジ', 'z', 'i'), ('ズ', 'z', 'u'), ('ゼ', 'z', 'e'), ('ゾ', 'z', 'o'),
    ('タ', 't', 'a'), ('チ', 'c', 'i'), ('ツ', 'c', 'u'), ('テ', 't', 'e'), ('ト', 't', 'o'),
    ('ダ', 'd', 'a'), ('ヂ', 'z', 'i'), ('ヅ', 'z', 'u'), ('デ', 'd', 'e'), ('ド', 'd', 'o'),
    ('ナ', 'n', 'a'), ('ニ', 'n', 'i'), ('ヌ', 'n', 'u'), ('ネ', 'n', 'e'), ('ノ', 'n', 'o'),
    ('ハ', 'h', 'a'), ('ヒ', 'h', 'i'), ('フ', 'f', 'u'), ('ヘ', 'h', 'e'), ('ホ', 'h', 'o'),
    ('バ', 'b', 'a'), ('ビ', 'b', 'i'), ('ブ', 'b', 'u'), ('ベ', 'b', 'e'), ('ボ', 'b', 'o'),
    ('パ', 'p', 'a'), ('ピ', 'p', 'i'), ('プ', 'p', 'u'), ('ペ', 'p', 'e'), ('ポ', 'p', 'o'),
    ('マ', 'm', 'a'), ('ミ', 'm', 'i'), ('ム', 'm', 'u'), ('メ', 'm', 'e'), ('モ', 'm', 'o'),
    ('ヤ', 'y', 'a'), ('ユ', 'y', 'u'), ('ヨ', 'y', 'o'),
    ('ャ', 'y', 'a'), ('ュ', 'y', 'u'), ('ョ', 'y', 'o'),
    ('ラ', 'r', 'a'), ('リ', 'r', 'i'), ('ル', 'r', 'u'), ('レ', 'r', 'e'), ('ロ', 'r', 'o'),
    ('ワ', 'w', 'a'), ('ヰ', 'w', 'i'), ('ヱ', 'w', 'e'), ('ヲ', 'w', 'o'), ('ヮ', 'w', 'a'),
    ('ヴ', 'v', 'u'),
];

fn lookup(c: char) -> Option<(char, char)> {
    KANA_TABLE
        .iter()
        .find(|(kana, _, _)| *kana == c)
        .map(|&(_, onset, nucleus)| (onset, nucleus))
}

/// Small glides turn the onset into its palatalized symbol
fn is_glide(c: char) -> bool {
    matches!(c, 'ャ' | 'ュ' | 'ョ')
}

fn romanize_mora(text: &str, previous_nucleus: Option<char>) -> [char; 2] {
    let katakana = to_katakana(text);
    let mut chars = katakana.chars();
    let Some(head) = chars.next() else {
        return UNKNOWN;
    };

    let base = match head {
        'ン' => return MORAIC_NASAL,
        'ッ' => return GEMINATE,
        'ー' => return [NO_ONSET, previous_nucleus.unwrap_or(':')],
        c => match lookup(c) {
            Some(pair) => pair,
            None => return UNKNOWN,
        },
    };

    match chars.next() {
        None => [base.0, base.1],
        Some(tail) => match lookup(tail) {
            Some((_, nucleus)) if is_glide(tail) => [base.0.to_ascii_uppercase(), nucleus],
            Some((_, nucleus)) => [base.0, nucleus],
            None => UNKNOWN,
        },
    }
}

/// Romanize every mora into an (onset, nucleus) pair
pub fn romanize(morae: &[Mora]) -> Vec<[char; 2]> {
    let mut pairs: Vec<[char; 2]> = Vec::with_capacity(morae.len());
    for mora in morae {
        let previous = pairs.last().map(|pair| pair[1]);
        pairs.push(romanize_mora(&mora.text, previous));
    }
    pairs
}

/// Flattened doubled-resolution string, two symbols per mora
pub fn romanize_reading(morae: &[Mora]) -> String {
    romanize(morae).into_iter().flatten().collect()
}
