//! Positional trigram extraction.
//!
//! Trigrams are taken at every character position of a normalized form, so a
//! trigram that repeats inside a word is produced once per occurrence:
//!
//! ```
//! use trispell::analysis::trigram::trigrams;
//!
//! let grams: Vec<&str> = trigrams("baaaa").collect();
//! assert_eq!(grams, vec!["baa", "aaa", "aaa"]);
//! ```

/// Number of characters in a trigram.
pub const TRIGRAM_LEN: usize = 3;

/// Iterator over the trigrams of a string, borrowing from it.
#[derive(Debug, Clone)]
pub struct Trigrams<'a> {
    text: &'a str,
    /// Byte offset of every character, plus the end of the string.
    boundaries: Vec<usize>,
    position: usize,
}

impl<'a> Iterator for Trigrams<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.boundaries.get(self.position + TRIGRAM_LEN)?;
        let start = self.boundaries[self.position];
        let text = self.text;
        self.position += 1;
        Some(&text[start..*end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .boundaries
            .len()
            .saturating_sub(self.position + TRIGRAM_LEN);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Trigrams<'_> {}

/// Extract all trigrams of `normalized`, left to right.
///
/// Strings shorter than three characters yield nothing.
pub fn trigrams(normalized: &str) -> Trigrams<'_> {
    let mut boundaries: Vec<usize> = normalized.char_indices().map(|(i, _)| i).collect();
    boundaries.push(normalized.len());

    Trigrams {
        text: normalized,
        boundaries,
        position: 0,
    }
}
