//! Error types for the dictionary load path.
//!
//! Classification itself never fails: structural problems are a `false`
//! verdict and unknown words surface as `RhymeVerdict::Unknown`. Errors only
//! come out of reading and caching the pronunciation dictionary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    /// IO error while reading the dictionary or its cache
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A dictionary line with a term but no phonemes
    #[error("dictionary line {line}: entry '{word}' has no phonemes")]
    MissingPhonemes { line: usize, word: String },

    /// Cache encode/decode error
    #[error("cache error: {0}")]
    Cache(#[from] bincode::Error),
}

/// Result type alias for dictionary operations
pub type Result<T> = std::result::Result<T, DictionaryError>;
