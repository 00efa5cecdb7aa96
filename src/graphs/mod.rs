use thiserror::Error;

pub mod adjacency_list_graph;
pub mod path;

pub type VertexId = u32;
pub type Weight = u32;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} does not exist, the graph has {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        number_of_vertices: u32,
    },
    #[error("the maximum weight value is reserved and cannot be stored on an arc")]
    ReservedWeight,
    #[error("there is no arc from {tail} to {head}")]
    ArcNotFound { tail: VertexId, head: VertexId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedArc {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedArc {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedArc {
        WeightedArc { tail, head, weight }
    }

    pub fn remove_tail(&self) -> TaillessArc {
        TaillessArc {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Adjacency list entry. The tail is implied by which list the arc is
/// stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaillessArc {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessArc {
    pub fn set_tail(&self, tail: VertexId) -> WeightedArc {
        WeightedArc {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
