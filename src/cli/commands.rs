//! Command implementations for the Trispell CLI.

use std::time::{Duration, Instant};

use log::info;
use rayon::ThreadPoolBuilder;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TrispellError};
use crate::spelling::loader::load_queries;
use crate::spelling::{CorrectionEngine, CorrectorConfig};

/// Execute a CLI command.
pub fn execute_command(args: TrispellArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args, &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args, &args),
        Command::Correct(correct_args) => correct_words(correct_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load the vocabulary and build an engine, timing the build.
fn load_engine(
    dictionary: &DictionaryArgs,
    config: CorrectorConfig,
) -> Result<(CorrectionEngine, Duration)> {
    info!("Loading vocabulary from {}", dictionary.dictionary.display());

    let start = Instant::now();
    let engine = CorrectionEngine::load_from_file(&dictionary.dictionary, config)?;
    Ok((engine, start.elapsed()))
}

/// Check membership of each word.
fn check_words(args: &CheckArgs, cli_args: &TrispellArgs) -> Result<()> {
    let config = args.dictionary.corrector_config()?;
    let (engine, _) = load_engine(&args.dictionary, config)?;

    let results = args
        .words
        .iter()
        .map(|word| MembershipResult {
            word: word.clone(),
            known: engine.exists(word),
        })
        .collect();

    output_result("Membership check", &CheckResults { results }, cli_args)
}

/// Suggest corrections for a single word.
fn suggest_word(args: &SuggestArgs, cli_args: &TrispellArgs) -> Result<()> {
    let mut config = args.dictionary.corrector_config()?;
    if args.limit.is_some() {
        config.max_suggestions = args.limit;
    }
    if args.max_distance.is_some() {
        config.max_distance = args.max_distance;
    }
    config.validate()?;

    let (engine, _) = load_engine(&args.dictionary, config)?;

    let start = Instant::now();
    let known = engine.exists(&args.word);
    let suggestions = engine.suggest(&args.word);
    let duration_us = start.elapsed().as_micros() as u64;

    output_result(
        "Suggestions",
        &SuggestResults {
            word: args.word.clone(),
            known,
            suggestions,
            duration_us,
        },
        cli_args,
    )
}

/// Correct every unknown word of a word list, in parallel.
fn correct_words(args: &CorrectArgs, cli_args: &TrispellArgs) -> Result<()> {
    let mut config = args.dictionary.corrector_config()?;
    if args.limit.is_some() {
        config.max_suggestions = args.limit;
    }
    config.validate()?;

    let threads = match args.threads {
        Some(0) => {
            return Err(TrispellError::invalid_argument(
                "--threads must be at least 1",
            ));
        }
        Some(threads) => threads,
        None => num_cpus::get(),
    };

    let (engine, build_duration) = load_engine(&args.dictionary, config)?;
    let queries = load_queries(&args.input)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| TrispellError::other(format!("Failed to create thread pool: {e}")))?;

    info!(
        "Correcting {} words on {} threads (vocabulary built in {}ms)",
        queries.len(),
        threads,
        build_duration.as_millis()
    );

    let start = Instant::now();
    let corrections = pool.install(|| engine.correct_batch(queries.as_slice()));
    let elapsed = start.elapsed();

    let corrections: Vec<_> = corrections
        .into_iter()
        .filter(|correction| !correction.known)
        .collect();

    let words_per_second = if elapsed.as_secs_f64() > 0.0 {
        queries.len() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    output_result(
        "Correction completed",
        &CorrectionReport {
            total_words: queries.len(),
            misspelled_words: corrections.len(),
            corrections,
            duration_ms: elapsed.as_millis() as u64,
            words_per_second,
        },
        cli_args,
    )
}

/// Show vocabulary and index statistics.
fn show_stats(args: &StatsArgs, cli_args: &TrispellArgs) -> Result<()> {
    let config = args.dictionary.corrector_config()?;
    let (engine, build_duration) = load_engine(&args.dictionary, config)?;
    let stats = engine.stats();

    output_result(
        "Vocabulary statistics",
        &StatsReport {
            words: stats.words,
            trigrams: stats.trigrams,
            postings: stats.postings,
            build_duration_ms: build_duration.as_millis() as u64,
        },
        cli_args,
    )
}
