//! Trigram inverted index over the vocabulary.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::trigram::trigrams;

/// Maps each trigram to the vocabulary words whose normalized form contains it.
///
/// Postings are kept in ingestion order. A word appears in a posting list
/// once per position at which the trigram occurs in its normalized form.
/// The index is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct TrigramIndex {
    postings: AHashMap<Box<str>, Vec<Arc<str>>>,
    total_postings: usize,
}

impl TrigramIndex {
    /// Get the words containing `trigram`, or an empty slice.
    pub fn lookup(&self, trigram: &str) -> &[Arc<str>] {
        self.postings
            .get(trigram)
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct trigrams.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Total number of (trigram, word) entries across all posting lists.
    pub fn total_postings(&self) -> usize {
        self.total_postings
    }
}

/// Accumulates postings during the single construction pass.
#[derive(Debug, Default)]
pub struct TrigramIndexBuilder {
    index: TrigramIndex,
}

impl TrigramIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `word` under every trigram of its normalized form.
    ///
    /// Returns the number of postings added; zero when the normalized form
    /// is shorter than a trigram.
    pub fn add(&mut self, word: &Arc<str>, normalized: &str) -> usize {
        let mut added = 0;

        for trigram in trigrams(normalized) {
            match self.index.postings.get_mut(trigram) {
                Some(words) => words.push(Arc::clone(word)),
                None => {
                    self.index
                        .postings
                        .insert(Box::from(trigram), vec![Arc::clone(word)]);
                }
            }
            added += 1;
        }

        self.index.total_postings += added;
        added
    }

    /// Finish construction.
    pub fn build(self) -> TrigramIndex {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(entries: &[(&str, &str)]) -> TrigramIndex {
        let mut builder = TrigramIndexBuilder::new();
        for (word, normalized) in entries {
            builder.add(&Arc::from(*word), normalized);
        }
        builder.build()
    }

    fn words(postings: &[Arc<str>]) -> Vec<&str> {
        postings.iter().map(|w| w.as_ref()).collect()
    }

    #[test]
    fn test_lookup_in_ingestion_order() {
        let index = build(&[
            ("kitten", "^kitten$"),
            ("mitten", "^mitten$"),
            ("bitten", "^bitten$"),
        ]);

        assert_eq!(words(index.lookup("ten")), vec!["kitten", "mitten", "bitten"]);
        assert_eq!(words(index.lookup("^ki")), vec!["kitten"]);
        assert!(index.lookup("zzz").is_empty());
    }

    #[test]
    fn test_stores_original_word() {
        let index = build(&[("Été", "^ete$")]);
        assert_eq!(words(index.lookup("ete")), vec!["Été"]);
        assert!(index.lookup("été").is_empty());
    }

    #[test]
    fn test_repeated_trigram_indexed_per_position() {
        let index = build(&[("aaaa", "^aaaa$")]);
        assert_eq!(words(index.lookup("aaa")), vec!["aaaa", "aaaa"]);
        assert_eq!(index.total_postings(), 4);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_short_word_contributes_nothing() {
        let mut builder = TrigramIndexBuilder::new();
        assert_eq!(builder.add(&Arc::from(""), "^$"), 0);
        assert_eq!(builder.add(&Arc::from("a"), "^a$"), 1);

        let index = builder.build();
        assert_eq!(index.len(), 1);
        assert_eq!(words(index.lookup("^a$")), vec!["a"]);
    }

    #[test]
    fn test_empty_index() {
        let index = TrigramIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.total_postings(), 0);
        assert!(index.lookup("abc").is_empty());
        assert_eq!(index.len(), 0);
    }
}
