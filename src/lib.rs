//! # Trispell
//!
//! Spelling correction for a fixed vocabulary.
//!
//! ## Features
//!
//! - Exact, case-sensitive membership checks
//! - Trigram inverted index to narrow large vocabularies to a bounded candidate set
//! - Accent and ligature folding through an extensible replacement table
//! - Levenshtein ranking of the candidates, with a pluggable distance strategy
//! - Parallel batch correction over a shared, immutable engine
//!
//! ```
//! use trispell::prelude::*;
//!
//! let engine = CorrectionEngine::build(["kitten", "sitting", "mitten", "bitten"])?;
//! if !engine.exists("kittn") {
//!     assert_eq!(engine.closest_words("kittn")[0], "kitten");
//! }
//! # Ok::<(), TrispellError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::error::{Result, TrispellError};
    pub use crate::spelling::{Correction, CorrectionEngine, CorrectorConfig, Suggestion};
    pub use crate::util::levenshtein::{
        EditDistance, TwoRowLevenshtein, WagnerFischerLevenshtein, levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
