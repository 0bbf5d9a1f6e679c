//! Word normalization for trigram extraction.
//!
//! A normalized form is the lowercase word with accented characters and
//! ligatures replaced from an [`AccentTable`], wrapped in a start and an end
//! sentinel so that edge trigrams record word boundaries. The sentinels are
//! control characters, and any occurrence of them in the input is dropped
//! while folding, so they never appear inside a word:
//!
//! ```
//! use trispell::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::with_default_table().unwrap();
//! assert_eq!(normalizer.normalize("Cœur"), "\u{2}coeur\u{3}");
//! assert_eq!(normalizer.fold("Été"), "ete");
//! ```

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrispellError};

/// Sentinel prepended to every normalized form (START OF TEXT).
pub const START_SENTINEL: char = '\u{2}';

/// Sentinel appended to every normalized form (END OF TEXT).
pub const END_SENTINEL: char = '\u{3}';

/// Returns true if `ch` is one of the boundary sentinels.
pub fn is_sentinel(ch: char) -> bool {
    ch == START_SENTINEL || ch == END_SENTINEL
}

/// Ordered mapping from accented characters (or sequences) to their
/// unaccented replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentTable {
    entries: Vec<(String, String)>,
}

impl AccentTable {
    /// Create an empty table. Normalization then only lowercases and pads.
    pub fn new() -> Self {
        AccentTable {
            entries: Vec::new(),
        }
    }

    /// The table used by default: French accents and the `œ` ligature.
    pub fn french() -> Self {
        AccentTable::new()
            .with("é", "e")
            .with("è", "e")
            .with("û", "u")
            .with("œ", "oe")
            .with("ô", "o")
    }

    /// Add a mapping, builder style.
    pub fn with<P: Into<String>, R: Into<String>>(mut self, pattern: P, replacement: R) -> Self {
        self.insert(pattern, replacement);
        self
    }

    /// Add a mapping. A later mapping for the same pattern replaces the earlier one.
    pub fn insert<P: Into<String>, R: Into<String>>(&mut self, pattern: P, replacement: R) {
        let pattern = pattern.into();
        let replacement = replacement.into();

        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = replacement,
            None => self.entries.push((pattern, replacement)),
        }
    }

    /// All `(pattern, replacement)` pairs in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AccentTable {
    fn default() -> Self {
        Self::french()
    }
}

/// Deterministic word normalizer: lowercase, strip accents, add sentinels.
///
/// Patterns are matched leftmost-longest against the lowercased word, so a
/// multi-character pattern wins over a single-character one starting at the
/// same position.
#[derive(Debug, Clone)]
pub struct Normalizer {
    matcher: Option<AhoCorasick>,
    replacements: Vec<String>,
}

impl Normalizer {
    /// Build a normalizer from an accent table.
    ///
    /// Patterns are lowercased since they are applied after case folding.
    /// Fails if a pattern is empty or if a replacement would introduce a
    /// sentinel character.
    pub fn new(table: &AccentTable) -> Result<Self> {
        let mut patterns = Vec::with_capacity(table.len());
        let mut replacements = Vec::with_capacity(table.len());

        for (pattern, replacement) in table.entries() {
            if pattern.is_empty() {
                return Err(TrispellError::analysis(
                    "accent table patterns must not be empty",
                ));
            }
            if replacement.chars().any(is_sentinel) {
                return Err(TrispellError::analysis(format!(
                    "replacement for {pattern:?} contains a sentinel character"
                )));
            }
            patterns.push(pattern.to_lowercase());
            replacements.push(replacement.clone());
        }

        let matcher = if patterns.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .build(&patterns)
                .map_err(|e| TrispellError::Anyhow(anyhow::Error::from(e)))?;
            Some(ac)
        };

        Ok(Normalizer {
            matcher,
            replacements,
        })
    }

    /// Build a normalizer with [`AccentTable::french`].
    pub fn with_default_table() -> Result<Self> {
        Self::new(&AccentTable::default())
    }

    /// Lowercase and strip accents, without sentinels.
    ///
    /// Sentinel characters in `word` are removed.
    pub fn fold(&self, word: &str) -> String {
        let mut lowered = word.to_lowercase();
        lowered.retain(|ch| !is_sentinel(ch));

        match &self.matcher {
            Some(ac) => ac.replace_all(&lowered, &self.replacements),
            None => lowered,
        }
    }

    /// Compute the normalized form used for trigram extraction.
    pub fn normalize(&self, word: &str) -> String {
        let folded = self.fold(word);

        let mut normalized = String::with_capacity(folded.len() + 2);
        normalized.push(START_SENTINEL);
        normalized.push_str(&folded);
        normalized.push(END_SENTINEL);
        normalized
    }
}
