//! Best-effort candidates and the random last resort
//!
//! When the breadth search finds no goal, it falls back to the first action of
//! the best-scoring node it saw. Candidates are kept in a max-heap ordered by:
//!
//! 1. gain, where a missing gain (`None`) always loses
//! 2. insertion order, earliest first
//!
//! The insertion counter makes ties reproducible across runs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;
use rand::prelude::IndexedRandom;
use rand::Rng;

/// One fallback candidate.
#[derive(Debug, Clone)]
pub struct FallbackEntry<A> {
    /// Round score of the node, `None` when it has no tile payload
    pub gain: Option<i32>,
    /// Insertion sequence number
    pub seq: u64,
    /// First action of the path that reached the node
    pub action: A,
}

impl<A> PartialEq for FallbackEntry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.gain == other.gain && self.seq == other.seq
    }
}

impl<A> Eq for FallbackEntry<A> {}

impl<A> PartialOrd for FallbackEntry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for FallbackEntry<A> {
    /// Greater means better: higher gain, then earlier insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .cmp(&other.gain)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of fallback candidates.
#[derive(Debug, Clone)]
pub struct FallbackQueue<A> {
    heap: BinaryHeap<FallbackEntry<A>>,
    next_seq: u64,
}

impl<A> FallbackQueue<A> {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Record a candidate.
    pub fn push(&mut self, gain: Option<i32>, action: A) {
        trace!("fallback candidate #{} gain={:?}", self.next_seq, gain);
        self.heap.push(FallbackEntry {
            gain,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Best candidate, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&FallbackEntry<A>> {
        self.heap.peek()
    }

    /// Remove and return the best candidate.
    pub fn pop_best(&mut self) -> Option<FallbackEntry<A>> {
        self.heap.pop()
    }

    /// Number of recorded candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` when no candidate was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<A> Default for FallbackQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random member of `actions`, `None` when empty.
pub fn random_action<A: Clone, R: Rng + ?Sized>(actions: &[A], rng: &mut R) -> Option<A> {
    actions.choose(rng).cloned()
}
