//! Word-list loading.
//!
//! Vocabulary files are read as whitespace-separated tokens, so both
//! one-word-per-line lists and free-form word dumps work. Query files hold
//! one word per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::Result;

/// Read vocabulary words from a reader, splitting on any whitespace.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_string));
    }

    Ok(words)
}

/// Load vocabulary words from a file.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

/// Read queries from a reader, one per line, trimmed. Blank lines are skipped.
pub fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();
    let mut blank = 0;

    for line in reader.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            blank += 1;
            continue;
        }
        queries.push(query.to_string());
    }

    if blank > 0 {
        warn!("Skipped {blank} blank lines in query list");
    }

    Ok(queries)
}

/// Load queries from a file.
pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_queries(BufReader::new(file))
}
