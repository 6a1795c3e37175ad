//! Bounded max-heap of search candidates.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One candidate seen during traversal: an entry table index and its
/// squared distance from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub distance_sq: f64,
    pub item: usize,
}

impl Eq for Hit {}

impl Ord for Hit {
    /// Orders by squared distance, then by item index so equal distances
    /// still sort deterministically. Distances are squares of finite
    /// inputs; an incomparable pair collapses to the item tiebreak.
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_sq
            .partial_cmp(&other.distance_sq)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.item.cmp(&other.item))
    }
}

impl PartialOrd for Hit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap holding at most `capacity` candidates; the worst kept
/// candidate sits at the top and is the first to go.
#[derive(Debug)]
pub struct CandidateHeap {
    heap: BinaryHeap<Hit>,
    capacity: usize,
}

impl CandidateHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a candidate: fill while under capacity, then replace the
    /// current worst only when the newcomer is strictly closer.
    pub fn record(&mut self, hit: Hit) {
        if self.heap.len() < self.capacity {
            self.heap.push(hit);
        } else if let Some(worst) = self.heap.peek() {
            if hit.distance_sq < worst.distance_sq {
                self.heap.pop();
                self.heap.push(hit);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Squared distance of the worst kept candidate while full,
    /// otherwise infinite: an under-filled heap must never prune.
    pub fn prune_threshold(&self) -> f64 {
        if self.is_full() {
            self.heap.peek().map_or(f64::INFINITY, |h| h.distance_sq)
        } else {
            f64::INFINITY
        }
    }

    /// Drain into a list sorted ascending by squared distance.
    pub fn into_sorted(self) -> Vec<Hit> {
        self.heap.into_sorted_vec()
    }
}
