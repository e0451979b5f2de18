//! End-to-end classification tests
//!
//! Exercise the full path a real run takes: a CMUdict-format file on disk,
//! loaded through the persistence layer (text parse plus cache), feeding a
//! detector.

use limerick_core::core::detector::Rejection;
use limerick_core::core::syllable::Fallback;
use limerick_core::{persistence, LimerickDetector, PronouncingDictionary};
use std::fs;
use tempfile::TempDir;

const DICT: &str = "\
seal S IY1 L
deal D IY1 L
wheel W IY1 L # round thing
run R AH1 N
fun F AH1 N
fire F AY1 ER0
fire(2) F AY1 R
";

const LIMERICK: &str = "\
there once was a young seal
it found a very good deal
they went to run
it was for fun
it rode on a big wheel
";

fn write_dict(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("cmudict.dict");
    fs::write(&path, DICT).unwrap();
    path
}

#[test]
fn classifies_from_a_dictionary_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_dict(&dir);

    let dict = persistence::load(&path).unwrap();
    let detector = LimerickDetector::new(dict);
    assert!(detector.is_limerick(LIMERICK));
}

#[test]
fn cached_dictionary_gives_the_same_verdict() {
    let dir = TempDir::new().unwrap();
    let path = write_dict(&dir);

    // First load parses the text and writes the sidecar cache.
    let first = LimerickDetector::new(persistence::load(&path).unwrap());
    assert!(path.with_extension("dict.bin").exists());

    // Second load comes from the cache.
    let second = LimerickDetector::new(persistence::load(&path).unwrap());
    assert_eq!(first.is_limerick(LIMERICK), second.is_limerick(LIMERICK));
    assert_eq!(first.dictionary().len(), second.dictionary().len());
}

#[test]
fn six_line_poem_is_rejected_before_any_lookup() {
    // An empty dictionary would turn every rhyme check into Unknown, but a
    // six-line poem never reaches one.
    let detector = LimerickDetector::new(PronouncingDictionary::new());
    let text = format!("{LIMERICK}and one line too many\n");
    let analysis = detector.analyze(&text);
    assert!(!analysis.is_limerick);
    assert_eq!(analysis.rejection, Some(Rejection::LineCount { found: 6 }));
}

#[test]
fn unknown_line_ending_yields_a_verdict_not_a_crash() {
    let dir = TempDir::new().unwrap();
    let detector = LimerickDetector::new(persistence::load(&write_dict(&dir)).unwrap());
    let text = LIMERICK.replace("deal", "zzqx");
    assert!(!detector.is_limerick(&text));
}

#[test]
fn orthographic_fallback_changes_unknown_word_totals() {
    let dir = TempDir::new().unwrap();
    let dict = persistence::load(&write_dict(&dir)).unwrap();

    // "wonderful" is not in the fixture dictionary: one syllable under the
    // flat fallback, three under the orthographic estimate. The extra
    // syllables push the B lines level with the A lines.
    let text = "\
there once was a young seal
it found a very good deal
on a wonderful run
for a wonderful fun
it rode on a big wheel
";
    let flat = LimerickDetector::new(dict.clone());
    assert!(flat.is_limerick(text));

    let guessing = LimerickDetector::with_fallback(dict, Fallback::Orthographic);
    assert!(!guessing.is_limerick(text));
}
