//! Levenshtein edit distance.
//!
//! Distances are computed over Unicode scalar values, not bytes, so an
//! accented character counts as a single edit. No normalization is applied:
//! `"Été"` and `"ete"` are three substitutions apart.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions (unit cost each) required to change one string into the other.
/// Only two rows of the dynamic-programming table are kept, sized by the
/// shorter of the two strings.
///
/// # Examples
///
/// ```
/// use trispell::util::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    // Rows run along the shorter string.
    let (outer, inner) = if s1_chars.len() >= s2_chars.len() {
        (&s1_chars, &s2_chars)
    } else {
        (&s2_chars, &s1_chars)
    };

    if inner.is_empty() {
        return outer.len();
    }

    let mut prev_row: Vec<usize> = (0..=inner.len()).collect();
    let mut curr_row = vec![0; inner.len() + 1];

    for (i, &outer_ch) in outer.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &inner_ch) in inner.iter().enumerate() {
            curr_row[j + 1] = if outer_ch == inner_ch {
                prev_row[j]
            } else {
                1 + min(
                    min(
                        prev_row[j + 1], // deletion
                        curr_row[j],     // insertion
                    ),
                    prev_row[j], // substitution
                )
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[inner.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`,
/// otherwise `Some(distance)`. Agrees with [`levenshtein_distance`] whenever
/// the result is within the threshold.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.len().abs_diff(s2_chars.len()) > threshold {
        return None;
    }

    let (outer, inner) = if s1_chars.len() >= s2_chars.len() {
        (&s1_chars, &s2_chars)
    } else {
        (&s2_chars, &s1_chars)
    };

    if inner.is_empty() {
        return Some(outer.len()).filter(|&d| d <= threshold);
    }

    let mut prev_row: Vec<usize> = (0..=inner.len()).collect();
    let mut curr_row = vec![0; inner.len() + 1];

    for (i, &outer_ch) in outer.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &inner_ch) in inner.iter().enumerate() {
            curr_row[j + 1] = if outer_ch == inner_ch {
                prev_row[j]
            } else {
                1 + min(min(prev_row[j + 1], curr_row[j]), prev_row[j])
            };
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minima never decrease, so the final cell cannot come back under.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Some(prev_row[inner.len()]).filter(|&d| d <= threshold)
}

/// Strategy for computing the edit distance used to rank candidates.
///
/// Implementations must agree with [`levenshtein_distance`]; they differ only
/// in how the dynamic-programming table is laid out.
pub trait EditDistance: Send + Sync {
    /// Short name used in logs and benchmark labels.
    fn name(&self) -> &'static str;

    /// Edit distance between `s1` and `s2`.
    fn distance(&self, s1: &str, s2: &str) -> usize;

    /// Edit distance if it is at most `threshold`, otherwise `None`.
    fn distance_within(&self, s1: &str, s2: &str, threshold: usize) -> Option<usize> {
        Some(self.distance(s1, s2)).filter(|&d| d <= threshold)
    }
}

/// Two-row Levenshtein: O(min(m, n)) memory, early exit under a threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TwoRowLevenshtein;

impl EditDistance for TwoRowLevenshtein {
    fn name(&self) -> &'static str {
        "two-row"
    }

    #[inline]
    fn distance(&self, s1: &str, s2: &str) -> usize {
        levenshtein_distance(s1, s2)
    }

    #[inline]
    fn distance_within(&self, s1: &str, s2: &str, threshold: usize) -> Option<usize> {
        levenshtein_distance_threshold(s1, s2, threshold)
    }
}

/// Wagner-Fischer over the full (m + 1) x (n + 1) matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WagnerFischerLevenshtein;

impl EditDistance for WagnerFischerLevenshtein {
    fn name(&self) -> &'static str {
        "wagner-fischer"
    }

    fn distance(&self, s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        let (m, n) = (s1_chars.len(), s2_chars.len());

        let mut matrix = vec![vec![0usize; n + 1]; m + 1];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in matrix[0].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..=m {
            for j in 1..=n {
                let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
                matrix[i][j] = min(
                    min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                    matrix[i - 1][j - 1] + cost,
                );
            }
        }

        matrix[m][n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
        assert_eq!(levenshtein_distance("rabbit", "cabbages"), 5);
    }

    const REFERENCE_PAIRS: [(&str, &str, usize); 9] = [
        ("kitten", "sitting", 3),
        ("rabbit", "cabbages", 5),
        ("logarytmique", "algorithmique", 5),
        ("algorithmique", "logarytmique", 5),
        ("gily", "geely", 2),
        ("honda", "hyundai", 3),
        ("", "hyundai", 7),
        ("a", "hyundai", 6),
        ("ab", "hyundai", 6),
    ];

    fn check_reference_pairs<D: EditDistance>(distance: D) {
        for (a, b, expected) in REFERENCE_PAIRS {
            assert_eq!(
                distance.distance(a, b),
                expected,
                "{} on {a:?} / {b:?}",
                distance.name()
            );
        }
    }

    #[test]
    fn test_reference_pairs() {
        check_reference_pairs(TwoRowLevenshtein);
        check_reference_pairs(WagnerFischerLevenshtein);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(levenshtein_distance("été", "ete"), 2);
        assert_eq!(levenshtein_distance("cœur", "coeur"), 2);
        assert_eq!(levenshtein_distance("", "œuvre"), 5);
    }

    #[test]
    fn test_symmetry_and_identity() {
        let words = ["", "a", "kitten", "sitting", "hyundai", "été", "abcabc", "cba"];

        for a in words {
            assert_eq!(levenshtein_distance(a, a), 0);
            assert_eq!(levenshtein_distance("", a), a.chars().count());
            for b in words {
                assert_eq!(
                    levenshtein_distance(a, b),
                    levenshtein_distance(b, a),
                    "asymmetric for {a:?} / {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["", "book", "back", "brook", "kitten", "mitten", "sitting", "rabbit"];

        for a in words {
            for b in words {
                for c in words {
                    let ac = levenshtein_distance(a, c);
                    let ab = levenshtein_distance(a, b);
                    let bc = levenshtein_distance(b, c);
                    assert!(ac <= ab + bc, "{a:?} {b:?} {c:?}: {ac} > {ab} + {bc}");
                }
            }
        }
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(
            levenshtein_distance_threshold("search", "search", 0),
            Some(0)
        );
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "ab", 2), Some(2));
        assert_eq!(levenshtein_distance_threshold("", "ab", 1), None);
    }

    #[test]
    fn test_threshold_agrees_with_full_distance() {
        let pairs = [
            ("rabbit", "cabbages"),
            ("honda", "hyundai"),
            ("logarytmique", "algorithmique"),
            ("gily", "geely"),
        ];

        for (a, b) in pairs {
            let full = levenshtein_distance(a, b);
            assert_eq!(levenshtein_distance_threshold(a, b, full), Some(full));
            assert_eq!(levenshtein_distance_threshold(b, a, full + 1), Some(full));
            assert_eq!(levenshtein_distance_threshold(a, b, full - 1), None);
        }
    }

    #[test]
    fn test_threshold_through_trait() {
        assert_eq!(TwoRowLevenshtein.distance_within("kitten", "sitting", 2), None);
        assert_eq!(
            WagnerFischerLevenshtein.distance_within("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(WagnerFischerLevenshtein.distance_within("", "ab", 1), None);
    }

    #[test]
    fn test_implementations_agree() {
        let words = ["", "a", "ab", "kitten", "sitting", "hyundai", "été", "cœur", "coeur"];

        for a in words {
            for b in words {
                assert_eq!(
                    WagnerFischerLevenshtein.distance(a, b),
                    TwoRowLevenshtein.distance(a, b),
                    "{a:?} / {b:?}"
                );
            }
        }
    }
}
