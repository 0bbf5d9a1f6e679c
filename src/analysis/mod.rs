//! Text analysis for trigram indexing.
//!
//! Words are normalized (case folding, accent stripping, sentinel padding)
//! before being cut into positional trigrams.

pub mod normalizer;
pub mod trigram;

// Re-export commonly used types
pub use normalizer::*;
pub use trigram::*;
