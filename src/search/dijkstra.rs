use super::dijkstra_data::DijkstraData;
use crate::graphs::{adjacency_list_graph::AdjacencyListGraph, path::Path, VertexId};

/// Single-pair Dijkstra.
///
/// Expands vertices in order of tentative distance and stops as soon as the
/// target is expanded; the remaining distances are not needed.
pub fn shortest_path(
    graph: &AdjacencyListGraph,
    source: VertexId,
    target: VertexId,
) -> Option<Path> {
    if source == target {
        return Some(Path {
            vertices: vec![source],
            weight: 0,
        });
    }

    let mut data = DijkstraData::new(graph.number_of_vertices() as usize, source);

    while let Some(tail) = data.pop() {
        if tail == target {
            break;
        }

        for arc in graph.out_arcs(tail) {
            data.update(tail, arc.head, arc.weight);
        }
    }

    data.path_to(target)
}
