use std::cmp::Ordering;

use crate::{PathWeight, VertexId};

/// Frontier entry. Entries are never updated in place, a relaxation pushes
/// a new one and stale copies are dropped when popped.
#[derive(Copy, Clone, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: PathWeight,
    pub(super) node: VertexId,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // equal costs pop the lower vertex id first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
