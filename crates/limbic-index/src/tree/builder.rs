//! Iterative KD-tree construction and lexicon axis statistics.
//!
//! The build runs on an explicit work list instead of recursion, so a
//! large or adversarially ordered lexicon cannot overflow the stack.
//! Each frame owns one contiguous slice of a permutation buffer; the
//! median along the frame's axis becomes the node and the two sub-slices
//! become child frames.

use std::cmp::Ordering;

use limbic_core::{Axis, AxisScale, EmotionEntry};

use super::{KdTree, Node};

/// Which child slot of the parent a finished frame fills.
#[derive(Clone, Copy)]
enum ChildSlot {
    Left,
    Right,
}

/// One pending slice of the permutation buffer.
struct Frame {
    /// Inclusive start of the slice.
    lo: usize,
    /// Exclusive end of the slice.
    hi: usize,
    depth: usize,
    parent: Option<(usize, ChildSlot)>,
}

/// Build a balanced tree over the entries. Entries are not copied; nodes
/// refer to them by table index.
pub fn build(entries: &[EmotionEntry]) -> KdTree {
    let mut nodes: Vec<Node> = Vec::with_capacity(entries.len());
    let mut root = None;

    let mut perm: Vec<usize> = (0..entries.len()).collect();
    let mut work: Vec<Frame> = Vec::with_capacity(64);
    work.push(Frame {
        lo: 0,
        hi: entries.len(),
        depth: 0,
        parent: None,
    });

    while let Some(frame) = work.pop() {
        if frame.lo >= frame.hi {
            continue;
        }
        let axis = Axis::from_depth(frame.depth);
        let median = (frame.lo + frame.hi) / 2;

        // Linear-time selection: the median lands at its sorted position,
        // smaller keys left of it, larger keys right of it. Equal keys
        // may land on either side.
        perm[frame.lo..frame.hi].select_nth_unstable_by(median - frame.lo, |a, b| {
            let ka = entries[*a].point.component(axis);
            let kb = entries[*b].point.component(axis);
            ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
        });

        let node_index = nodes.len();
        nodes.push(Node {
            item: perm[median],
            axis,
            left: None,
            right: None,
        });
        match frame.parent {
            Some((parent, ChildSlot::Left)) => nodes[parent].left = Some(node_index),
            Some((parent, ChildSlot::Right)) => nodes[parent].right = Some(node_index),
            None => root = Some(node_index),
        }

        // Right frame first so the left one pops first.
        if median + 1 < frame.hi {
            work.push(Frame {
                lo: median + 1,
                hi: frame.hi,
                depth: frame.depth + 1,
                parent: Some((node_index, ChildSlot::Right)),
            });
        }
        if frame.lo < median {
            work.push(Frame {
                lo: frame.lo,
                hi: median,
                depth: frame.depth + 1,
                parent: Some((node_index, ChildSlot::Left)),
            });
        }
    }

    KdTree::from_parts(nodes, root)
}

/// Sample standard deviation of the entry set along each axis, floored
/// by [`AxisScale::new`]. Uses the unbiased estimator with a denominator
/// of `max(1, n - 1)`.
pub fn axis_scale(entries: &[EmotionEntry]) -> AxisScale {
    let n = entries.len();
    let mut mean = [0.0f64; 3];
    for entry in entries {
        mean[0] += entry.point.valence;
        mean[1] += entry.point.arousal;
        mean[2] += entry.point.dominance;
    }
    if n > 0 {
        for m in &mut mean {
            *m /= n as f64;
        }
    }

    let mut var = [0.0f64; 3];
    for entry in entries {
        let dv = entry.point.valence - mean[0];
        let da = entry.point.arousal - mean[1];
        let dd = entry.point.dominance - mean[2];
        var[0] += dv * dv;
        var[1] += da * da;
        var[2] += dd * dd;
    }
    let denom = n.saturating_sub(1).max(1) as f64;

    AxisScale::new(
        (var[0] / denom).sqrt(),
        (var[1] / denom).sqrt(),
        (var[2] / denom).sqrt(),
    )
}
