//! Bounded top-K selection of candidates by trigram overlap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A vocabulary word with its trigram overlap against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore<'a> {
    /// The candidate word, as stored in the vocabulary.
    pub word: &'a str,
    /// Number of query trigram positions that matched this word.
    pub overlap: usize,
    /// Order in which the candidate was first encountered while tallying.
    pub seen: usize,
}

/// Heap entry; the heap top is the candidate to evict next.
#[derive(Debug)]
struct HeapEntry<'a>(CandidateScore<'a>);

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on overlap; among equal overlaps the latest-seen is evicted first.
        other
            .0
            .overlap
            .cmp(&self.0.overlap)
            .then_with(|| self.0.seen.cmp(&other.0.seen))
    }
}

/// Keeps the `max_candidates` candidates with the highest overlap.
///
/// Once full, a new candidate only replaces the current minimum if its
/// overlap is strictly greater, so among equal overlaps at the boundary the
/// candidate collected first is retained. Runs in O(D log K) for D collected
/// candidates.
#[derive(Debug)]
pub struct TopCandidatesCollector<'a> {
    max_candidates: usize,
    heap: BinaryHeap<HeapEntry<'a>>,
    total_collected: usize,
}

impl<'a> TopCandidatesCollector<'a> {
    /// Create a new collector keeping at most `max_candidates` entries.
    pub fn new(max_candidates: usize) -> Self {
        TopCandidatesCollector {
            max_candidates,
            heap: BinaryHeap::with_capacity(max_candidates),
            total_collected: 0,
        }
    }

    /// Offer a candidate to the collector.
    pub fn collect(&mut self, candidate: CandidateScore<'a>) {
        self.total_collected += 1;

        if self.max_candidates == 0 {
            return;
        }

        if self.heap.len() < self.max_candidates {
            self.heap.push(HeapEntry(candidate));
        } else if let Some(worst) = self.heap.peek()
            && candidate.overlap > worst.0.overlap
        {
            self.heap.pop();
            self.heap.push(HeapEntry(candidate));
        }
    }

    /// The lowest overlap currently retained, if any.
    pub fn min_overlap(&self) -> Option<usize> {
        self.heap.peek().map(|entry| entry.0.overlap)
    }

    /// Number of candidates currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of candidates offered so far, retained or not.
    pub fn total_collected(&self) -> usize {
        self.total_collected
    }

    /// Consume the collector, returning the retained candidates in the order
    /// they were first seen.
    pub fn into_candidates(self) -> Vec<CandidateScore<'a>> {
        let mut candidates: Vec<CandidateScore<'a>> =
            self.heap.into_iter().map(|entry| entry.0).collect();
        candidates.sort_by_key(|candidate| candidate.seen);
        candidates
    }
}
