//! Dictionary-backed syllable counting.

use crate::core::dictionary::PronouncingDictionary;
use crate::core::types::has_stress_digit;
use crate::heuristic;

/// What to do with a word the dictionary does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Count every unknown word as one syllable.
    #[default]
    FlatOne,
    /// Estimate from spelling via [`heuristic::guess_syllables`], floored
    /// at one (a pronounceable word has at least one syllable).
    Orthographic,
}

pub struct SyllableCounter<'a> {
    dict: &'a PronouncingDictionary,
    fallback: Fallback,
}

impl<'a> SyllableCounter<'a> {
    pub fn new(dict: &'a PronouncingDictionary, fallback: Fallback) -> Self {
        Self { dict, fallback }
    }

    /// Number of syllables in `word`.
    ///
    /// For a known word this is the stressed-vowel count of its shortest
    /// pronunciation variant: alternate variants often drop a reduced
    /// syllable, and the shorter reading is treated as canonical. Unknown
    /// words go through the configured fallback.
    pub fn count(&self, word: &str) -> usize {
        let Some(variants) = self.dict.lookup(word) else {
            return match self.fallback {
                Fallback::FlatOne => 1,
                Fallback::Orthographic => heuristic::guess_syllables(word).max(1),
            };
        };
        variants
            .iter()
            .map(|pron| pron.iter().filter(|ph| has_stress_digit(ph)).count())
            .min()
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> PronouncingDictionary {
        let mut dict = PronouncingDictionary::new();
        dict.insert("seal", vec!["S".into(), "IY1".into(), "L".into()]);
        dict.insert(
            "fire",
            vec!["F".into(), "AY1".into(), "ER0".into()],
        );
        dict.insert("fire", vec!["F".into(), "AY1".into(), "R".into()]);
        dict
    }

    #[test]
    fn counts_stressed_vowels() {
        let dict = fixture();
        let counter = SyllableCounter::new(&dict, Fallback::FlatOne);
        assert_eq!(counter.count("seal"), 1);
    }

    #[test]
    fn takes_minimum_across_variants() {
        // "fire" has a two-syllable and a one-syllable reading.
        let dict = fixture();
        let counter = SyllableCounter::new(&dict, Fallback::FlatOne);
        assert_eq!(counter.count("fire"), 1);
    }

    #[test]
    fn unknown_word_counts_one_by_default() {
        let dict = fixture();
        let counter = SyllableCounter::new(&dict, Fallback::FlatOne);
        assert_eq!(counter.count("zzqx"), 1);
    }

    #[test]
    fn orthographic_fallback_estimates_from_spelling() {
        let dict = fixture();
        let counter = SyllableCounter::new(&dict, Fallback::Orthographic);
        assert_eq!(counter.count("window"), 2);
        // Known words still resolve through the dictionary.
        assert_eq!(counter.count("fire"), 1);
        // The estimate never drops below one syllable.
        assert_eq!(counter.count("zzqx"), 1);
    }
}
