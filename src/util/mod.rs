//! Shared utility modules.

pub mod levenshtein;

// Re-export commonly used types
pub use levenshtein::*;
