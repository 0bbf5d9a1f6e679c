//! Two-stage correction engine: trigram candidate retrieval, then exact
//! edit-distance ranking.

use std::fs;
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{AccentTable, Normalizer};
use crate::analysis::trigram::trigrams;
use crate::error::{Result, TrispellError};
use crate::spelling::collector::{CandidateScore, TopCandidatesCollector};
use crate::spelling::loader;
use crate::spelling::trigram_index::{TrigramIndex, TrigramIndexBuilder};
use crate::spelling::vocabulary::VocabularySet;
use crate::util::levenshtein::{EditDistance, TwoRowLevenshtein};

/// Default number of overlap candidates ranked by edit distance.
pub const DEFAULT_MAX_CANDIDATES: usize = 100;

/// Configuration for the correction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Number of highest-overlap candidates kept for distance ranking.
    pub max_candidates: usize,
    /// Drop candidates farther than this edit distance.
    pub max_distance: Option<usize>,
    /// Maximum number of suggestions to return.
    pub max_suggestions: Option<usize>,
    /// Accent and ligature replacements applied before trigram extraction.
    pub accent_table: AccentTable,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_distance: None,
            max_suggestions: None,
            accent_table: AccentTable::default(),
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive an engine.
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(TrispellError::invalid_config(
                "max_candidates must be at least 1",
            ));
        }
        if self.max_suggestions == Some(0) {
            return Err(TrispellError::invalid_config(
                "max_suggestions must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The vocabulary word, exactly as stored.
    pub word: String,
    /// Edit distance between the raw query and the word.
    pub distance: usize,
    /// Trigram overlap that got the word into the candidate pool.
    pub overlap: usize,
}

/// Outcome of checking and, if needed, correcting one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The word as queried.
    pub word: String,
    /// Whether the word is in the vocabulary.
    pub known: bool,
    /// Ranked suggestions; empty for known words.
    pub suggestions: Vec<Suggestion>,
}

impl Correction {
    /// The best-ranked suggestion, if any.
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// Sizes of the structures built from the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Number of distinct vocabulary words.
    pub words: usize,
    /// Number of distinct trigrams.
    pub trigrams: usize,
    /// Number of (trigram, word) postings.
    pub postings: usize,
}

/// Spelling correction engine over an immutable vocabulary.
///
/// Built once from a stream of words; every query method takes `&self` and
/// uses only call-local state, so an engine can be shared across threads.
/// Candidates are ranked with the [`EditDistance`] strategy `D`, two-row
/// Levenshtein unless another one is given to [`CorrectionEngine::with_distance`].
///
/// # Examples
///
/// ```
/// use trispell::spelling::CorrectionEngine;
///
/// let engine = CorrectionEngine::build(["kitten", "sitting", "mitten", "bitten"]).unwrap();
///
/// assert!(engine.exists("kitten"));
/// assert!(!engine.exists("kittn"));
/// assert_eq!(engine.closest_words("kittn")[0], "kitten");
/// ```
#[derive(Debug, Clone)]
pub struct CorrectionEngine<D: EditDistance = TwoRowLevenshtein> {
    vocabulary: VocabularySet,
    index: TrigramIndex,
    normalizer: Normalizer,
    config: CorrectorConfig,
    distance: D,
}

impl CorrectionEngine {
    /// Build an engine with the default configuration.
    pub fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_config(words, CorrectorConfig::default())
    }

    /// Build an engine from a word stream and a configuration.
    ///
    /// Fails before reading any word if the configuration is invalid.
    pub fn build_with_config<I, S>(words: I, config: CorrectorConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CorrectionEngine::with_distance(words, config, TwoRowLevenshtein)
    }

    /// Build an engine from a whitespace-separated word list on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: CorrectorConfig) -> Result<Self> {
        let words = loader::load_words(path)?;
        Self::build_with_config(words, config)
    }
}

impl<D: EditDistance> CorrectionEngine<D> {
    /// Build an engine that ranks candidates with `distance`.
    pub fn with_distance<I, S>(words: I, config: CorrectorConfig, distance: D) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let normalizer = Normalizer::new(&config.accent_table)?;

        let start = Instant::now();
        let words = words.into_iter();
        let mut vocabulary = VocabularySet::with_capacity(words.size_hint().0);
        let mut builder = TrigramIndexBuilder::new();

        for word in words {
            let word = word.as_ref();
            if let Some(shared) = vocabulary.insert(word) {
                builder.add(&shared, &normalizer.normalize(word));
            }
        }

        let index = builder.build();

        info!(
            "Built correction engine: {} words, {} trigrams, {} postings in {}ms ({} distance)",
            vocabulary.len(),
            index.len(),
            index.total_postings(),
            start.elapsed().as_millis(),
            distance.name()
        );

        Ok(CorrectionEngine {
            vocabulary,
            index,
            normalizer,
            config,
            distance,
        })
    }

    /// Check if a word is in the vocabulary, exactly as given.
    pub fn exists(&self, word: &str) -> bool {
        self.vocabulary.exists(word)
    }

    /// The closest vocabulary words to `query`, by ascending edit distance.
    pub fn closest_words(&self, query: &str) -> Vec<String> {
        self.suggest(query)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Ranked suggestions for `query`.
    ///
    /// Candidates sharing the most trigrams with the query are kept (at most
    /// `max_candidates`), then sorted by edit distance to the raw query. Equal
    /// distances keep the order in which candidates were first encountered.
    /// Exact vocabulary matches are not special-cased.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let normalized = self.normalizer.normalize(query);
        let tallies = self.tally_overlaps(&normalized);

        let mut collector = TopCandidatesCollector::new(self.config.max_candidates);
        for (seen, (word, overlap)) in tallies.into_iter().enumerate() {
            collector.collect(CandidateScore {
                word,
                overlap,
                seen,
            });
        }
        let distinct = collector.total_collected();
        let min_overlap = collector.min_overlap().unwrap_or(0);
        let candidates = collector.into_candidates();

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let distance = match self.config.max_distance {
                    Some(max) => self.distance.distance_within(query, candidate.word, max)?,
                    None => self.distance.distance(query, candidate.word),
                };
                Some(Suggestion {
                    word: candidate.word.to_string(),
                    distance,
                    overlap: candidate.overlap,
                })
            })
            .collect();

        suggestions.sort_by_key(|suggestion| suggestion.distance);

        if let Some(limit) = self.config.max_suggestions {
            suggestions.truncate(limit);
        }

        debug!(
            "Query {:?}: {} overlapping words, candidate overlap >= {}, {} suggestions",
            query,
            distinct,
            min_overlap,
            suggestions.len()
        );

        suggestions
    }

    /// Check a word and suggest corrections if it is unknown.
    pub fn correct(&self, word: &str) -> Correction {
        let known = self.exists(word);
        let suggestions = if known { Vec::new() } else { self.suggest(word) };

        Correction {
            word: word.to_string(),
            known,
            suggestions,
        }
    }

    /// Correct many words in parallel. Results are in input order.
    pub fn correct_batch<S>(&self, words: &[S]) -> Vec<Correction>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.correct(word.as_ref()))
            .collect()
    }

    /// Count, per vocabulary word, how many query trigram positions hit it.
    /// Words are returned in first-seen order.
    fn tally_overlaps<'a>(&'a self, normalized: &str) -> Vec<(&'a str, usize)> {
        let mut positions: AHashMap<&'a str, usize> = AHashMap::new();
        let mut tallies: Vec<(&'a str, usize)> = Vec::new();

        for trigram in trigrams(normalized) {
            for word in self.index.lookup(trigram) {
                let word: &'a str = word;
                let next = tallies.len();
                let slot = *positions.entry(word).or_insert(next);
                if slot == next {
                    tallies.push((word, 0));
                }
                tallies[slot].1 += 1;
            }
        }

        tallies
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Get the edit distance strategy used for ranking.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Get statistics about the built structures.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            words: self.vocabulary.len(),
            trigrams: self.index.len(),
            postings: self.index.total_postings(),
        }
    }
}
