//! Command line argument parsing for the Trispell CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::CorrectorConfig;

/// Trispell - trigram-indexed spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "trispell")]
#[command(about = "Check words against a vocabulary and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Trispell Contributors")]
#[command(long_about = None)]
pub struct TrispellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TrispellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether words are in the vocabulary
    Check(CheckArgs),

    /// Suggest corrections for a single word
    Suggest(SuggestArgs),

    /// Correct every unknown word of a word list
    Correct(CorrectArgs),

    /// Show vocabulary and index statistics
    Stats(StatsArgs),
}

/// Options shared by every command that builds an engine
#[derive(Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// Vocabulary file (whitespace-separated words)
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of trigram candidates ranked by edit distance
    #[arg(short = 'k', long)]
    pub candidates: Option<usize>,
}

impl DictionaryArgs {
    /// Resolve the engine configuration: file (or defaults), then overrides.
    pub fn corrector_config(&self) -> Result<CorrectorConfig> {
        let mut config = match &self.config {
            Some(path) => CorrectorConfig::load_from_file(path)?,
            None => CorrectorConfig::default(),
        };

        if let Some(candidates) = self.candidates {
            config.max_candidates = candidates;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Drop suggestions farther than this edit distance
    #[arg(long)]
    pub max_distance: Option<usize>,
}

/// Arguments for correcting a word list
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// File with one word per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Maximum number of suggestions per word (default: all ranked candidates)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
