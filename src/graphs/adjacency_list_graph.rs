use super::{path::Path, GraphError, TaillessArc, VertexId, Weight, WeightedArc};
use crate::search::dijkstra;

/// A directed graph with non-negative arc weights, stored as one
/// outgoing-arc list per vertex.
///
/// Vertices are dense indices in `[0, number_of_vertices)` and only exist
/// as positions in the adjacency structure. Parallel arcs between the same
/// ordered vertex pair are permitted and not deduplicated.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyListGraph {
    arcs: Vec<Vec<TaillessArc>>,
    number_of_arcs: u32,
}

impl AdjacencyListGraph {
    pub fn new(number_of_vertices: u32) -> AdjacencyListGraph {
        AdjacencyListGraph {
            arcs: vec![Vec::new(); number_of_vertices as usize],
            number_of_arcs: 0,
        }
    }

    pub fn from_arcs(
        number_of_vertices: u32,
        arcs: &[WeightedArc],
    ) -> Result<AdjacencyListGraph, GraphError> {
        let mut graph = AdjacencyListGraph::new(number_of_vertices);
        for arc in arcs {
            graph.add_arc(arc.tail, arc.head, arc.weight)?;
        }
        Ok(graph)
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.arcs.len() as u32
    }

    pub fn number_of_arcs(&self) -> u32 {
        self.number_of_arcs
    }

    /// Changes the number of vertices.
    ///
    /// Growing appends empty adjacency lists. Shrinking drops the trailing
    /// lists along with their outgoing arcs. Arcs in surviving lists that
    /// point at a dropped vertex are left in place; they no longer lead
    /// anywhere and the shortest-path search ignores them.
    pub fn resize(&mut self, number_of_vertices: u32) {
        for arcs in self.arcs.iter().skip(number_of_vertices as usize) {
            self.number_of_arcs -= arcs.len() as u32;
        }
        self.arcs.resize(number_of_vertices as usize, Vec::new());
    }

    /// Adds an arc from `tail` to `head`. An arc between the same pair may
    /// be added more than once.
    ///
    /// Fails if either vertex does not exist or if `weight` is the reserved
    /// maximum value. The graph is unchanged on failure.
    pub fn add_arc(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        if weight == Weight::MAX {
            return Err(GraphError::ReservedWeight);
        }

        self.arcs[tail as usize].push(TaillessArc { head, weight });
        self.number_of_arcs += 1;
        Ok(())
    }

    /// Removes one arc from `tail` to `head`. When parallel arcs exist, the
    /// most recently added one is removed. The tail vertex itself always
    /// stays.
    ///
    /// Fails if either vertex does not exist or if no such arc is stored.
    pub fn remove_arc(&mut self, tail: VertexId, head: VertexId) -> Result<(), GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;

        let arcs = &mut self.arcs[tail as usize];
        let position = arcs
            .iter()
            .rposition(|arc| arc.head == head)
            .ok_or(GraphError::ArcNotFound { tail, head })?;
        arcs.remove(position);
        self.number_of_arcs -= 1;
        Ok(())
    }

    /// Returns the weight of the arc from `tail` to `head`. When parallel
    /// arcs exist, the oldest one wins.
    pub fn weight(&self, tail: VertexId, head: VertexId) -> Result<Weight, GraphError> {
        self.check_vertex(tail)?;

        self.arcs[tail as usize]
            .iter()
            .find(|arc| arc.head == head)
            .map(|arc| arc.weight)
            .ok_or(GraphError::ArcNotFound { tail, head })
    }

    pub fn out_arcs(&self, tail: VertexId) -> impl ExactSizeIterator<Item = WeightedArc> + '_ {
        let arcs = if let Some(arcs) = self.arcs.get(tail as usize) {
            arcs.as_slice()
        } else {
            &[]
        };

        arcs.iter().map(move |arc| arc.set_tail(tail))
    }

    /// Computes a shortest path from `source` to `target`.
    ///
    /// Returns `Ok(None)` when `target` cannot be reached from `source`.
    /// When `source == target` the path is the single vertex with weight
    /// zero, without traversing the graph. The graph is only read, never
    /// mutated, and each call runs on fresh search state.
    pub fn shortest_path(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Path>, GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        Ok(dijkstra::shortest_path(self, source, target))
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex as usize >= self.arcs.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        Ok(())
    }
}
