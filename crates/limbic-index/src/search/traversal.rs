//! Pruning k-NN descent over the arena with an explicit stack.

use limbic_core::{EmotionEntry, SearchError, VadPoint};

use super::heap::{CandidateHeap, Hit};
use crate::tree::KdTree;

/// Candidate admission policy, selected by the traversal token.
///
/// A closed set: the hot loop dispatches with a plain `match`, and a new
/// policy means a new variant here rather than a trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisitPolicy {
    /// Plain k-NN: every visited point competes.
    Unbounded,
    /// Radius-bounded k-NN: points beyond the radius never compete and
    /// the pruning threshold is capped at the squared radius.
    RadiusBounded { radius_sq: f64 },
}

impl VisitPolicy {
    fn admits(&self, distance_sq: f64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::RadiusBounded { radius_sq } => distance_sq <= *radius_sq,
        }
    }

    fn cap_threshold(&self, threshold: f64) -> f64 {
        match self {
            Self::Unbounded => threshold,
            Self::RadiusBounded { radius_sq } => threshold.min(*radius_sq),
        }
    }
}

/// Walk the tree keeping the `k` closest admitted candidates, returned
/// ascending by squared distance.
///
/// A far child is descended only when the query's distance to the split
/// plane could still beat the current pruning threshold. All arena and
/// entry references are checked; an out-of-range index aborts the whole
/// query with [`SearchError::TraversalFailed`].
pub fn traverse(
    tree: &KdTree,
    entries: &[EmotionEntry],
    query: &VadPoint,
    k: usize,
    policy: VisitPolicy,
) -> Result<Vec<Hit>, SearchError> {
    let mut heap = CandidateHeap::with_capacity(k);
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    if let Some(root) = tree.root() {
        stack.push(root);
    }

    while let Some(index) = stack.pop() {
        let node = tree.node(index).ok_or(SearchError::TraversalFailed)?;
        let entry = entries.get(node.item).ok_or(SearchError::TraversalFailed)?;

        let distance_sq = query.distance_sq(&entry.point);
        if policy.admits(distance_sq) {
            heap.record(Hit {
                distance_sq,
                item: node.item,
            });
        }

        let delta = query.component(node.axis) - entry.point.component(node.axis);
        let (near, far) = if delta <= 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        let threshold = policy.cap_threshold(heap.prune_threshold());

        // Far side first: LIFO pops the near side before it.
        if let Some(far) = far {
            if delta * delta <= threshold {
                stack.push(far);
            }
        }
        if let Some(near) = near {
            stack.push(near);
        }
    }

    Ok(heap.into_sorted())
}
