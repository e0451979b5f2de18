//! The limerick structure validator.
//!
//! A limerick here is a poem of the form AABBA: the A lines (1, 2 and 5)
//! rhyme with each other, the B lines (3 and 4) rhyme with each other, and
//! the A lines do not rhyme with the B lines. On top of the rhyme scheme:
//!
//!   * No two A lines differ in syllable count by more than two.
//!   * The B lines differ in syllable count by no more than two.
//!   * Each B line has fewer syllables than each A line.
//!   * No line has fewer than 4 syllables.
//!
//! English professors may disagree with this definition, but it is the one
//! used here.

use crate::core::dictionary::PronouncingDictionary;
use crate::core::rhyme::RhymeMatcher;
use crate::core::syllable::{Fallback, SyllableCounter};
use crate::core::types::RhymeVerdict;
use log::debug;
use serde::Serialize;

/// Line positions of the rhyme groups, zero-indexed.
const A_LINES: [usize; 3] = [0, 1, 4];
const B_LINES: [usize; 2] = [2, 3];

/// The rhyme group a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RhymeGroup {
    A,
    B,
}

/// The first rule a rejected poem violated. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum Rejection {
    /// Not exactly five non-blank lines.
    LineCount { found: usize },
    /// A line with no words left after cleaning.
    EmptyLine { line: usize },
    /// Two line-final words of the same group fail to rhyme.
    BrokenRhyme {
        group: RhymeGroup,
        a: String,
        b: String,
    },
    /// A line-final word has no dictionary pronunciation, so the rhyme
    /// scheme cannot be established.
    UnknownWord { word: String },
    /// An A-line word rhymes with a B-line word.
    CrossRhyme { a: String, b: String },
    /// A B line has at least as many syllables as an A line.
    SyllableOrder { a_total: usize, b_total: usize },
    /// Adjacent lines of one group differ by more than two syllables.
    UnevenGroup {
        group: RhymeGroup,
        left: usize,
        right: usize,
    },
    /// A line with fewer than four syllables.
    ShortLine { line: usize, syllables: usize },
}

/// One cleaned input line. Syllable totals stay unset when evaluation stops
/// before the syllable rules run.
#[derive(Debug, Clone, Serialize)]
pub struct LineAnalysis {
    pub words: Vec<String>,
    pub last_word: Option<String>,
    pub syllables: Option<usize>,
}

/// Full evaluation of one poem: the verdict, the first violated rule if
/// any, and the per-line breakdown. Serialized as the `--debug` report.
#[derive(Debug, Clone, Serialize)]
pub struct PoemAnalysis {
    pub is_limerick: bool,
    pub rejection: Option<Rejection>,
    pub lines: Vec<LineAnalysis>,
}

/// Classifies poems against a pronunciation dictionary supplied at
/// construction. Holds no other state; classification is a pure function of
/// the input text and the dictionary.
pub struct LimerickDetector {
    dictionary: PronouncingDictionary,
    fallback: Fallback,
}

impl LimerickDetector {
    pub fn new(dictionary: PronouncingDictionary) -> Self {
        Self::with_fallback(dictionary, Fallback::FlatOne)
    }

    /// Selects the syllable strategy for words outside the dictionary.
    pub fn with_fallback(dictionary: PronouncingDictionary, fallback: Fallback) -> Self {
        Self {
            dictionary,
            fallback,
        }
    }

    pub fn dictionary(&self) -> &PronouncingDictionary {
        &self.dictionary
    }

    /// Takes text where lines are separated by newline characters. Returns
    /// true if the text is a limerick.
    pub fn is_limerick(&self, text: &str) -> bool {
        self.analyze(text).is_limerick
    }

    /// Evaluates `text`, stopping at the first violated rule. The line-count
    /// and empty-line gates run before any dictionary lookup, so malformed
    /// input is rejected without consulting pronunciations at all.
    pub fn analyze(&self, text: &str) -> PoemAnalysis {
        let mut lines: Vec<LineAnalysis> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let words = tokenize(line);
                let last_word = words.last().cloned();
                LineAnalysis {
                    words,
                    last_word,
                    syllables: None,
                }
            })
            .collect();

        if lines.len() != 5 {
            let found = lines.len();
            return rejected(lines, Rejection::LineCount { found });
        }
        if let Some(i) = lines.iter().position(|line| line.words.is_empty()) {
            return rejected(lines, Rejection::EmptyLine { line: i + 1 });
        }

        let last_words: Vec<String> = lines
            .iter()
            .filter_map(|line| line.last_word.clone())
            .collect();

        let matcher = RhymeMatcher::new(&self.dictionary);

        // Rhyme chains within each group.
        for (group, positions) in [(RhymeGroup::A, &A_LINES[..]), (RhymeGroup::B, &B_LINES[..])] {
            for pair in positions.windows(2) {
                let (a, b) = (&last_words[pair[0]], &last_words[pair[1]]);
                match matcher.verdict(a, b) {
                    RhymeVerdict::Rhymes => {}
                    RhymeVerdict::Differs => {
                        return rejected(
                            lines,
                            Rejection::BrokenRhyme {
                                group,
                                a: a.clone(),
                                b: b.clone(),
                            },
                        );
                    }
                    RhymeVerdict::Unknown(word) => {
                        return rejected(lines, Rejection::UnknownWord { word });
                    }
                }
            }
        }

        // A words must not rhyme with B words.
        for &ai in &A_LINES {
            for &bi in &B_LINES {
                let (a, b) = (&last_words[ai], &last_words[bi]);
                match matcher.verdict(a, b) {
                    RhymeVerdict::Rhymes => {
                        return rejected(
                            lines,
                            Rejection::CrossRhyme {
                                a: a.clone(),
                                b: b.clone(),
                            },
                        );
                    }
                    RhymeVerdict::Unknown(word) => {
                        return rejected(lines, Rejection::UnknownWord { word });
                    }
                    RhymeVerdict::Differs => {}
                }
            }
        }

        let counter = SyllableCounter::new(&self.dictionary, self.fallback);
        for line in &mut lines {
            line.syllables = Some(line.words.iter().map(|w| counter.count(w)).sum());
        }
        let totals: Vec<usize> = lines.iter().filter_map(|line| line.syllables).collect();
        let a_counts = [totals[0], totals[1], totals[4]];
        let b_counts = [totals[2], totals[3]];

        // Every A line outweighs every B line.
        for &a in &a_counts {
            for &b in &b_counts {
                if a <= b {
                    return rejected(
                        lines,
                        Rejection::SyllableOrder {
                            a_total: a,
                            b_total: b,
                        },
                    );
                }
            }
        }

        // Adjacent lines within a group stay within two syllables.
        for (group, counts) in [(RhymeGroup::A, &a_counts[..]), (RhymeGroup::B, &b_counts[..])] {
            for pair in counts.windows(2) {
                if pair[0].abs_diff(pair[1]) >= 3 {
                    return rejected(
                        lines,
                        Rejection::UnevenGroup {
                            group,
                            left: pair[0],
                            right: pair[1],
                        },
                    );
                }
            }
        }

        for (i, &total) in totals.iter().enumerate() {
            if total < 4 {
                return rejected(
                    lines,
                    Rejection::ShortLine {
                        line: i + 1,
                        syllables: total,
                    },
                );
            }
        }

        PoemAnalysis {
            is_limerick: true,
            rejection: None,
            lines,
        }
    }
}

fn rejected(lines: Vec<LineAnalysis>, rejection: Rejection) -> PoemAnalysis {
    debug!("rejected: {:?}", rejection);
    PoemAnalysis {
        is_limerick: false,
        rejection: Some(rejection),
        lines,
    }
}

/// Strips everything but word characters, whitespace and apostrophes, then
/// splits on whitespace into lowercase words.
fn tokenize(line: &str) -> Vec<String> {
    let cleaned: String = line
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'' || *c == '_')
        .collect();
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
