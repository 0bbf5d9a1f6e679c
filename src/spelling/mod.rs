//! Spelling correction against a fixed vocabulary.
//!
//! A [`CorrectionEngine`] is built once from a word stream. It keeps an exact
//! [`VocabularySet`] for membership checks and a [`TrigramIndex`] that narrows
//! the vocabulary to the words sharing the most trigrams with a query, which
//! are then ranked by Levenshtein distance.

pub mod collector;
pub mod engine;
pub mod loader;
pub mod trigram_index;
pub mod vocabulary;

// Re-export commonly used types
pub use collector::{CandidateScore, TopCandidatesCollector};
pub use engine::*;
pub use trigram_index::{TrigramIndex, TrigramIndexBuilder};
pub use vocabulary::VocabularySet;
