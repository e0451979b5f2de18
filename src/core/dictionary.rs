//! Read-only pronunciation lookup backed by the CMU Pronouncing Dictionary.
//!
//! The dictionary file maps a term to its phonemes, one entry per line, with
//! alternate pronunciations listed as `term(2)`, `term(3)` and so on:
//!
//! ```text
//! aluminium AH0 L UW1 M IH0 N AH0 M
//! aluminium(2) AE2 L Y UW1 M IH0 N AH0 M
//! achill AE1 K IH0 L # place, irish
//! ```
//!
//! Variant lines fold into the base term, so a lookup returns every
//! pronunciation the dictionary knows for a word. `#` starts a comment that
//! runs to the end of the line.

use crate::core::types::Pronunciation;
use crate::error::{DictionaryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::BufRead;

/// Immutable word-to-pronunciations map. Built once at startup, then shared
/// read-only by the syllable counter, the rhyme matcher and the detector.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PronouncingDictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl PronouncingDictionary {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parses a full dictionary in CMUdict text format.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dict = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            dict.parse_line(&line?, idx + 1)?;
        }
        Ok(dict)
    }

    /// Parses a single `term PH PH ...` line. Blank and comment-only lines
    /// are skipped; a term without phonemes is an error.
    fn parse_line(&mut self, line: &str, lineno: usize) -> Result<()> {
        let text = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let mut tokens = text.split_whitespace();
        let Some(term) = tokens.next() else {
            return Ok(());
        };
        let phonemes: Pronunciation = tokens.map(str::to_string).collect();
        if phonemes.is_empty() {
            return Err(DictionaryError::MissingPhonemes {
                line: lineno,
                word: term.to_string(),
            });
        }
        self.insert(base_term(term), phonemes);
        Ok(())
    }

    /// Adds one pronunciation variant for `word`. The parser and test
    /// fixtures both go through here.
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pronunciation);
    }

    /// Every pronunciation variant known for `word`, or `None` if the word
    /// is not in the dictionary. Callers pass lowercase words.
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words (variants fold into their base word).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips the `(N)` variant marker, e.g. `aluminium(2)` -> `aluminium`.
fn base_term(term: &str) -> &str {
    match (term.find('('), term.ends_with(')')) {
        (Some(pos), true) => &term[..pos],
        _ => term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> PronouncingDictionary {
        PronouncingDictionary::from_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn parses_basic_entries() {
        let dict = parse("ampersand AE1 M P ER0 S AE2 N D\n");
        let prons = dict.lookup("ampersand").unwrap();
        assert_eq!(prons.len(), 1);
        assert_eq!(
            prons[0],
            vec!["AE1", "M", "P", "ER0", "S", "AE2", "N", "D"]
        );
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let dict = parse("\ngdp G IY1 D IY1 P IY1 # abbrev ## IGN\n   \n");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup("gdp").unwrap()[0].len(), 6);
    }

    #[test]
    fn folds_variant_lines_into_base_word() {
        let dict = parse("amounted AH0 M AW1 N T IH0 D\namounted(2) AH0 M AW1 N IH0 D\n");
        assert_eq!(dict.len(), 1);
        let prons = dict.lookup("amounted").unwrap();
        assert_eq!(prons.len(), 2);
        assert_eq!(prons[1], vec!["AH0", "M", "AW1", "N", "IH0", "D"]);
    }

    #[test]
    fn keeps_punctuation_in_terms() {
        let dict = parse("'frisco F R IH1 S K OW0\na.m. EY2 EH1 M\n");
        assert!(dict.lookup("'frisco").is_some());
        assert!(dict.lookup("a.m.").is_some());
    }

    #[test]
    fn rejects_entry_without_phonemes() {
        let err = PronouncingDictionary::from_reader(Cursor::new("a AH0\nbare\n")).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MissingPhonemes { line: 2, .. }
        ));
    }

    #[test]
    fn lookup_misses_return_none() {
        let dict = parse("a AH0\n");
        assert!(dict.lookup("zzqx").is_none());
    }
}
