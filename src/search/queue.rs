use std::cmp::Ordering;

use crate::graphs::{VertexId, Weight};

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct QueueElement {
    pub distance: Weight,
    pub vertex: VertexId,
}

impl QueueElement {
    pub fn new(distance: Weight, vertex: VertexId) -> QueueElement {
        QueueElement { distance, vertex }
    }
}

// Ordered by distance descending so that a `BinaryHeap` of elements acts as
// a min-heap. Ties fall back to the vertex id to keep `Ord` consistent with
// `PartialEq`.
impl Ord for QueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
