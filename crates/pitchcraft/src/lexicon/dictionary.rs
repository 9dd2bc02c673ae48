use pitchcraft_core::mora::to_katakana;
use pitchcraft_core::{LexicalAnalyzer, Morpheme, Parse, Token, Tokenizer, TokenizerFactory};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::{LexiconError, Result};

/// Part-of-speech tag given to characters the lexicon does not cover
pub const UNKNOWN_TAG: &str = "未知語";

/// One lexicon line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub surface: String,
    /// Katakana reading
    pub reading: String,
    pub part_of_speech: Vec<String>,
    /// Raw accent-kernel field
    pub acc: Option<String>,
}

impl LexiconEntry {
    /// Parse `surface<TAB>reading[<TAB>pos,pos…[<TAB>acc]]`
    fn parse(line: &str, line_number: usize) -> Result<Self> {
        let invalid = |message: &str| LexiconError::InvalidLine {
            line: line_number,
            message: message.to_string(),
        };

        let mut fields = line.split('\t').map(str::trim);
        let surface = fields.next().filter(|s| !s.is_empty());
        let reading = fields.next().filter(|s| !s.is_empty());
        let (Some(surface), Some(reading)) = (surface, reading) else {
            return Err(invalid("expected at least surface and reading"));
        };

        let part_of_speech = fields
            .next()
            .map(|pos| {
                pos.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let acc = fields
            .next()
            .filter(|acc| !acc.is_empty())
            .map(str::to_string);

        if fields.next().is_some() {
            return Err(invalid("too many fields"));
        }

        Ok(Self {
            surface: surface.to_string(),
            reading: to_katakana(reading),
            part_of_speech,
            acc,
        })
    }

    fn token(&self) -> Token {
        Token::new(self.reading.clone(), self.part_of_speech.clone())
    }

    fn morpheme(&self) -> Morpheme {
        Morpheme {
            surface: self.surface.clone(),
            reading: self.reading.clone(),
            acc: self.acc.clone(),
            concat: None,
        }
    }
}

/// Word list keyed by surface text
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Arc<HashMap<String, LexiconEntry>>,
    longest_surface: usize,
}

impl Lexicon {
    /// Load a lexicon file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(&content)?;
        info!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Parse lexicon text; `#` starts a comment line
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            entries.push(LexiconEntry::parse(line, index + 1)?);
        }
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = LexiconEntry>) -> Result<Self> {
        let mut by_surface = HashMap::new();
        let mut longest_surface = 0;

        for entry in entries {
            longest_surface = longest_surface.max(entry.surface.chars().count());
            if by_surface.contains_key(&entry.surface) {
                return Err(LexiconError::DuplicateEntry(entry.surface));
            }
            by_surface.insert(entry.surface.clone(), entry);
        }

        Ok(Self {
            entries: Arc::new(by_surface),
            longest_surface,
        })
    }

    pub fn get(&self, surface: &str) -> Option<&LexiconEntry> {
        self.entries.get(surface)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Greedy longest-match split of `text`.
    ///
    /// Uncovered characters come back as `Err(char)` one at a time.
    fn longest_match(&self, text: &str) -> Vec<std::result::Result<&LexiconEntry, char>> {
        let chars: Vec<char> = text.chars().collect();
        let mut pieces = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let max_len = self.longest_surface.min(chars.len() - start);
            let found = (1..=max_len).rev().find_map(|len| {
                let candidate: String = chars[start..start + len].iter().collect();
                self.entries.get(&candidate).map(|entry| (entry, len))
            });

            match found {
                Some((entry, len)) => {
                    pieces.push(Ok(entry));
                    start += len;
                }
                None => {
                    pieces.push(Err(chars[start]));
                    start += 1;
                }
            }
        }

        pieces
    }
}

/// Tokenizer handle over a shared [`Lexicon`]
pub struct LexiconTokenizer {
    lexicon: Lexicon,
}

impl Tokenizer for LexiconTokenizer {
    fn tokenize(&mut self, text: &str) -> pitchcraft_core::Result<Vec<Token>> {
        let tokens = self
            .lexicon
            .longest_match(text)
            .into_iter()
            .filter_map(|piece| match piece {
                Ok(entry) => Some(entry.token()),
                Err(c) if c.is_whitespace() => None,
                Err(c) => Some(Token::new(
                    to_katakana(&c.to_string()),
                    vec![UNKNOWN_TAG.to_string()],
                )),
            })
            .collect();
        Ok(tokens)
    }
}

impl TokenizerFactory for Lexicon {
    fn create(&self) -> pitchcraft_core::Result<Box<dyn Tokenizer>> {
        Ok(Box::new(LexiconTokenizer {
            lexicon: self.clone(),
        }))
    }
}

impl LexicalAnalyzer for Lexicon {
    fn lookup(&self, surface: &str, reading: &str) -> pitchcraft_core::Result<Vec<Parse>> {
        let mut parse = Vec::new();
        for piece in self.longest_match(surface) {
            match piece {
                Ok(entry) => parse.push(entry.morpheme()),
                Err(c) => {
                    debug!("'{}' not covered by the lexicon at '{}'", surface, c);
                    return Ok(Vec::new());
                }
            }
        }

        let parsed_reading: String = parse.iter().map(|m| m.reading.as_str()).collect();
        if parse.is_empty() || parsed_reading != to_katakana(reading) {
            return Ok(Vec::new());
        }

        Ok(vec![parse])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
# surface\treading\tpos\tacc
箸\tハシ\t名詞,普通名詞\t1
橋\tハシ\t名詞,普通名詞\t2
人工\tジンコウ\t名詞,普通名詞\t0
知能\tチノウ\t名詞,普通名詞\t1
人工知能\tジンコウチノウ\t名詞,普通名詞\t4

食べる\tたべる\t動詞\t2
";

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lexicon = Lexicon::parse(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 6);

        let entry = lexicon.get("食べる").unwrap();
        assert_eq!(entry.reading, "タベル");
        assert_eq!(entry.part_of_speech, vec!["動詞".to_string()]);
        assert_eq!(entry.acc.as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_optional_fields() {
        let lexicon = Lexicon::parse("猫\tネコ\n").unwrap();
        let entry = lexicon.get("猫").unwrap();
        assert!(entry.part_of_speech.is_empty());
        assert_eq!(entry.acc, None);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        let result = Lexicon::parse("箸\n");
        assert!(matches!(
            result,
            Err(LexiconError::InvalidLine { line: 1, .. })
        ));

        let result = Lexicon::parse("箸\tハシ\n箸\tハシ\n");
        assert!(matches!(result, Err(LexiconError::DuplicateEntry(_))));
    }

    #[test]
    fn test_tokenizer_prefers_longest_match() {
        let lexicon = Lexicon::parse(SAMPLE).unwrap();
        let mut tokenizer = lexicon.create().unwrap();

        let tokens = tokenizer.tokenize("人工知能").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].reading_form, "ジンコウチノウ");
        assert!(tokens[0].is_noun());

        let tokens = tokenizer.tokenize("知能人工").unwrap();
        let readings: Vec<_> = tokens.iter().map(|t| t.reading_form.as_str()).collect();
        assert_eq!(readings, vec!["チノウ", "ジンコウ"]);
    }

    #[test]
    fn test_tokenizer_marks_unknown_characters() {
        let lexicon = Lexicon::parse(SAMPLE).unwrap();
        let mut tokenizer = lexicon.create().unwrap();

        let tokens = tokenizer.tokenize("箸と").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].reading_form, "ト");
        assert_eq!(tokens[1].part_of_speech, vec![UNKNOWN_TAG.to_string()]);
        assert!(!tokens[1].is_noun());
    }

    #[test]
    fn test_lookup_single_parse() {
        let lexicon = Lexicon::parse(SAMPLE).unwrap();

        let parses = lexicon.lookup("橋", "ハシ").unwrap();
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].len(), 1);
        assert_eq!(parses[0][0].acc.as_deref(), Some("2"));

        let parses = lexicon.lookup("食べる", "たべる").unwrap();
        assert_eq!(parses.len(), 1);
    }

    #[test]
    fn test_lookup_rejects_uncovered_or_mismatched() {
        let lexicon = Lexicon::parse(SAMPLE).unwrap();

        assert!(lexicon.lookup("箸と", "ハシト").unwrap().is_empty());
        assert!(lexicon.lookup("箸", "ハシラ").unwrap().is_empty());
        assert!(lexicon.lookup("", "").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.len(), 6);

        let result = Lexicon::load(Path::new("/nonexistent/lexicon.tsv"));
        assert!(matches!(result, Err(LexiconError::IoError(_))));
    }
}
