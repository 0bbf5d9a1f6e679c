//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TrispellArgs};
use crate::error::Result;
use crate::spelling::{Correction, Suggestion};

/// Membership of a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipResult {
    pub word: String,
    pub known: bool,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub results: Vec<MembershipResult>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub word: String,
    pub known: bool,
    pub suggestions: Vec<Suggestion>,
    pub duration_us: u64,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub total_words: usize,
    pub misspelled_words: usize,
    pub corrections: Vec<Correction>,
    pub duration_ms: u64,
    pub words_per_second: f64,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    pub words: usize,
    pub trigrams: usize,
    pub postings: usize,
    pub build_duration_ms: u64,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for CheckResults {
    fn print_human(&self) {
        for result in &self.results {
            let status = if result.known { "ok" } else { "unknown" };
            println!("{}: {status}", result.word);
        }
    }
}

impl HumanOutput for SuggestResults {
    fn print_human(&self) {
        if self.known {
            println!("{} is in the vocabulary", self.word);
        }

        if self.suggestions.is_empty() {
            println!("No suggestions for {}", self.word);
            return;
        }

        println!("Suggestions for {}:", self.word);
        println!("═══════════════");
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            println!(
                "{:>3}. {} (distance: {}, overlap: {})",
                i + 1,
                suggestion.word,
                suggestion.distance,
                suggestion.overlap
            );
        }
        println!();
        println!("Lookup time: {}µs", self.duration_us);
    }
}

impl HumanOutput for CorrectionReport {
    fn print_human(&self) {
        for correction in &self.corrections {
            let suggestions: Vec<&str> = correction
                .suggestions
                .iter()
                .map(|s| s.word.as_str())
                .collect();
            if suggestions.is_empty() {
                println!("{} -> (no suggestions)", correction.word);
            } else {
                println!("{} -> {}", correction.word, suggestions.join(", "));
            }
        }

        println!();
        println!("Words checked: {}", self.total_words);
        println!("Misspelled: {}", self.misspelled_words);
        println!(
            "Correction ran in {}ms ({:.1} words/s)",
            self.duration_ms, self.words_per_second
        );
    }
}

impl HumanOutput for StatsReport {
    fn print_human(&self) {
        println!("Vocabulary Statistics:");
        println!("═════════════════════");
        println!("Words: {}", self.words);
        println!("Trigrams: {}", self.trigrams);
        println!("Postings: {}", self.postings);
        if self.trigrams > 0 {
            println!(
                "Average posting list length: {:.1}",
                self.postings as f64 / self.trigrams as f64
            );
        }
        println!("Build time: {}ms", self.build_duration_ms);
    }
}

/// Output a result in the requested format.
pub fn output_result<T>(message: &str, result: &T, args: &TrispellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &TrispellArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TrispellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let report = StatsReport {
            words: 4,
            trigrams: 20,
            postings: 26,
            build_duration_ms: 1,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["words"], 4);
        assert_eq!(value["postings"], 26);
    }

    #[test]
    fn test_suggest_results_serialization() {
        let results = SuggestResults {
            word: "kittn".to_string(),
            known: false,
            suggestions: vec![Suggestion {
                word: "kitten".to_string(),
                distance: 1,
                overlap: 2,
            }],
            duration_us: 10,
        };

        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["suggestions"][0]["word"], "kitten");
        assert_eq!(value["suggestions"][0]["distance"], 1);
    }
}
