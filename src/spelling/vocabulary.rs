//! Exact-membership vocabulary.

use std::sync::Arc;

use ahash::AHashSet;

/// The set of known words, exactly as supplied.
///
/// Membership is case and accent sensitive: `"Kitten"` and `"kitten"` are
/// different words. Each word is stored once as a shared `Arc<str>`, which
/// the trigram index refers to instead of copying.
#[derive(Debug, Clone, Default)]
pub struct VocabularySet {
    words: AHashSet<Arc<str>>,
}

impl VocabularySet {
    /// Create an empty vocabulary with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        VocabularySet {
            words: AHashSet::with_capacity(capacity),
        }
    }

    /// Insert a word, returning the shared handle if it was not already present.
    pub(crate) fn insert(&mut self, word: &str) -> Option<Arc<str>> {
        if self.words.contains(word) {
            return None;
        }

        let word: Arc<str> = Arc::from(word);
        self.words.insert(Arc::clone(&word));
        Some(word)
    }

    /// Check if a word exists in the vocabulary.
    pub fn exists(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
