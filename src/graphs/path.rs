use super::{VertexId, Weight};

/// A path in a graph.
///
/// Holds the vertices that form the path, in tail-to-head order, and the
/// total weight of traversing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}
