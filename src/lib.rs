//! Limerick classification against the CMU Pronouncing Dictionary.

pub mod core;
pub mod error;
pub mod heuristic;
pub mod persistence;

pub use crate::core::detector::LimerickDetector;
pub use crate::core::dictionary::PronouncingDictionary;
