//! Integration tests for the correction engine over on-disk word lists.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use tempfile::NamedTempFile;
use trispell::prelude::*;
use trispell::spelling::loader::load_queries;

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Deterministic vocabulary of short consonant-vowel words.
fn synthetic_vocabulary() -> Vec<String> {
    let consonants = ['b', 'c', 'd', 'f', 'g', 'l', 'm', 'p', 'r', 's', 't'];
    let vowels = ['a', 'e', 'i', 'o', 'u'];
    let mut words = Vec::new();

    for &c1 in &consonants {
        for &v1 in &vowels {
            for &c2 in &consonants {
                for &v2 in &vowels {
                    words.push(format!("{c1}{v1}{c2}{v2}"));
                }
            }
        }
    }

    words
}

#[test]
fn test_engine_from_file() -> Result<()> {
    let dictionary = write_lines(&["kitten sitting", "mitten", "bitten"]);
    let engine = CorrectionEngine::load_from_file(dictionary.path(), CorrectorConfig::default())?;

    assert!(engine.exists("kitten"));
    assert!(engine.exists("bitten"));
    assert!(!engine.exists("kittens"));
    assert_eq!(engine.closest_words("kittn")[0], "kitten");
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(levenshtein_distance("rabbit", "cabbages"), 5);

    Ok(())
}

#[test]
fn test_config_from_file() -> Result<()> {
    let config_file = write_lines(&[r#"{"max_candidates": 2, "max_suggestions": 1}"#]);
    let config = CorrectorConfig::load_from_file(config_file.path())?;
    assert_eq!(config.max_candidates, 2);
    assert_eq!(config.max_suggestions, Some(1));

    let engine = CorrectionEngine::build_with_config(["kitten", "mitten", "bitten"], config)?;
    assert_eq!(engine.closest_words("kitten"), vec!["kitten"]);

    Ok(())
}

#[test]
fn test_invalid_config_file() {
    let config_file = write_lines(&[r#"{"max_candidates": 0}"#]);
    let result = CorrectorConfig::load_from_file(config_file.path());
    assert!(matches!(result, Err(TrispellError::InvalidConfig(_))));

    let broken = write_lines(&["{ not json"]);
    let result = CorrectorConfig::load_from_file(broken.path());
    assert!(matches!(result, Err(TrispellError::Json(_))));
}

#[test]
fn test_results_are_vocabulary_words_sorted_by_distance() -> Result<()> {
    let vocabulary = synthetic_vocabulary();
    let engine = CorrectionEngine::build(&vocabulary)?;
    assert_eq!(engine.stats().words, vocabulary.len());

    for query in ["bace", "tiroo", "mpa", "salu", "doddo", "xyz", "", "Bata"] {
        let suggestions = engine.suggest(query);

        assert!(suggestions.len() <= engine.config().max_candidates);
        for suggestion in &suggestions {
            assert!(engine.exists(&suggestion.word), "{} not in vocabulary", suggestion.word);
            assert_eq!(
                suggestion.distance,
                levenshtein_distance(query, &suggestion.word)
            );
        }
        for pair in suggestions.windows(2) {
            assert!(pair[0].distance <= pair[1].distance, "unsorted for {query:?}");
        }
    }

    Ok(())
}

#[test]
fn test_candidate_pool_is_capped() -> Result<()> {
    let vocabulary = synthetic_vocabulary();
    let config = CorrectorConfig {
        max_candidates: 10,
        ..Default::default()
    };
    let engine = CorrectionEngine::build_with_config(&vocabulary, config)?;

    // "ba" prefixes 55 words; only the 10 best overlaps are ranked.
    let suggestions = engine.suggest("baba");
    assert_eq!(suggestions.len(), 10);
    assert_eq!(suggestions[0].word, "baba");
    assert_eq!(suggestions[0].distance, 0);

    let max_overlap = suggestions.iter().map(|s| s.overlap).max().unwrap();
    assert_eq!(max_overlap, 4);

    Ok(())
}

#[test]
fn test_queries_are_deterministic() -> Result<()> {
    let engine = CorrectionEngine::build(synthetic_vocabulary())?;

    let first = engine.suggest("tiroo");
    for _ in 0..5 {
        assert_eq!(engine.suggest("tiroo"), first);
    }

    Ok(())
}

#[test]
fn test_concurrent_queries_share_engine() -> Result<()> {
    let engine = Arc::new(CorrectionEngine::build(synthetic_vocabulary())?);
    let expected = engine.closest_words("pelo");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.closest_words("pelo"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    Ok(())
}

#[test]
fn test_batch_correction_of_query_file() -> Result<()> {
    let dictionary = write_lines(&["élève", "hôtel", "cœur", "kitten", "sitting"]);
    let queries = write_lines(&["eleve", "", "hotel", "kitten", "sittin"]);

    let engine = CorrectionEngine::load_from_file(dictionary.path(), CorrectorConfig::default())?;
    let queries = load_queries(queries.path())?;
    assert_eq!(queries.len(), 4);

    let corrections = engine.correct_batch(queries.as_slice());
    let best: Vec<Option<&str>> = corrections
        .iter()
        .map(|c| c.best().map(|s| s.word.as_str()))
        .collect();

    assert_eq!(best, vec![Some("élève"), Some("hôtel"), None, Some("sitting")]);
    assert!(corrections[2].known);

    Ok(())
}
