//! Rhyme detection via phoneme-suffix comparison.
//!
//! Two words rhyme when some pronunciation of one shares its rhyme part with
//! some pronunciation of the other. The rhyme part of a pronunciation is the
//! phoneme run from its first vowel sound to the end; its signature is those
//! symbols concatenated without separators, stress digits included, e.g.
//! `["S", "IY1", "L"]` -> `"IY1L"`.
//!
//! Signatures match when equal or when one is a string suffix of the other.
//! Because the concatenation has no symbol boundaries, a suffix match can
//! straddle a phoneme boundary (part of one symbol's digits against
//! another's letters) and accept a pair no human would call a rhyme. That is
//! the accepted behavior of this matcher, kept as-is rather than switching
//! to phoneme-list suffix comparison, which would change which word pairs
//! are judged to rhyme.

use crate::core::dictionary::PronouncingDictionary;
use crate::core::types::{is_vowel, Pronunciation, RhymeVerdict};

pub struct RhymeMatcher<'a> {
    dict: &'a PronouncingDictionary,
}

impl<'a> RhymeMatcher<'a> {
    pub fn new(dict: &'a PronouncingDictionary) -> Self {
        Self { dict }
    }

    /// Compares two lowercase words. A word without a dictionary entry
    /// yields `Unknown` naming that word; the first missing word wins.
    pub fn verdict(&self, a: &str, b: &str) -> RhymeVerdict {
        let Some(a_prons) = self.dict.lookup(a) else {
            return RhymeVerdict::Unknown(a.to_string());
        };
        let Some(b_prons) = self.dict.lookup(b) else {
            return RhymeVerdict::Unknown(b.to_string());
        };

        let a_sigs: Vec<String> = a_prons.iter().map(signature).collect();
        let b_sigs: Vec<String> = b_prons.iter().map(signature).collect();

        for sa in &a_sigs {
            for sb in &b_sigs {
                if sa.ends_with(sb.as_str()) || sb.ends_with(sa.as_str()) {
                    return RhymeVerdict::Rhymes;
                }
            }
        }
        RhymeVerdict::Differs
    }
}

/// Signature of one pronunciation: everything from the first vowel phoneme
/// onward, concatenated. A pronunciation with no vowel signs as the empty
/// string, which matches anything.
fn signature(pron: &Pronunciation) -> String {
    let start = pron.iter().position(|ph| is_vowel(ph)).unwrap_or(pron.len());
    pron[start..].concat()
}
