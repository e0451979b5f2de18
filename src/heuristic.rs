//! Rule-based syllable estimation from spelling alone.
//!
//! An alternate estimator for words the pronunciation dictionary does not
//! know. It counts vowel clusters and then applies a set of orthographic
//! corrections (silent final `e`, `-le` endings, `-ed` suffixes, `mc-` and
//! `pre-`/`co-` prefixes). Selected through
//! [`Fallback::Orthographic`](crate::core::syllable::Fallback); the default
//! detector configuration does not use it.

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

fn is_vowel_letter(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimates the syllable count of `word` from its spelling.
///
/// Leading and trailing `:;,.!?` punctuation is stripped first. An empty
/// word estimates 0; a word of three letters or fewer always estimates 1.
/// The corrections can drive the running total below zero for unusual
/// spellings, in which case the estimate clamps to 0.
pub fn guess_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let word = word.trim_matches(|c| ":;,.!?".contains(c));
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n == 0 {
        return 0;
    }
    if n <= 3 {
        return 1;
    }

    let mut total: i32 = 0;

    // Silent final e, unless the word ends in a consonant + "le(s)" cluster
    // where the e is its own nucleus ("table", "tables").
    if !is_vowel_letter(chars[n - 2]) && chars[n - 1] == 'e' {
        total -= 1;
    }
    if n >= 3 && !is_vowel_letter(chars[n - 3]) && word.ends_with("le") {
        total += 1;
    }
    if n >= 4 && !is_vowel_letter(chars[n - 4]) && word.ends_with("les") {
        total += 1;
    }

    if is_vowel_letter(chars[0]) {
        total += 1;
    }
    // Each consonant-to-vowel transition opens a new vowel cluster.
    for i in 1..n {
        if is_vowel_letter(chars[i]) && !is_vowel_letter(chars[i - 1]) {
            total += 1;
        }
    }
    // "ia" / "io" hiatus splits a cluster in two ("via", "radio").
    for i in 1..n - 1 {
        if chars[i] == 'i' && (chars[i + 1] == 'a' || chars[i + 1] == 'o') {
            total += 1;
        }
    }

    // "-ed" is silent after anything but t or d ("jumped" vs "wanted").
    if word.ends_with("ed") && chars[n - 3] != 't' && chars[n - 3] != 'd' {
        total -= 1;
    }
    if word.ends_with("fully") && n != 5 {
        total -= 1;
    }
    if word.ends_with("yee") {
        total += 1;
    }
    if word.starts_with("mc") {
        total += 1;
    }
    // "pre" + vowel and "co" + vowel keep the prefix as its own syllable
    // ("preamble", "coexist").
    if (word.starts_with("pre") && is_vowel_letter(chars[3]))
        || (word.starts_with("co") && is_vowel_letter(chars[2]))
    {
        total += 1;
    }

    total.max(0) as usize
}
