use std::collections::BinaryHeap;

use super::queue::QueueElement;
use crate::graphs::{path::Path, VertexId, Weight};

#[derive(Clone)]
struct VertexEntry {
    predecessor: Option<VertexId>,
    distance: Option<Weight>,
    is_expanded: bool,
}

impl VertexEntry {
    fn new() -> VertexEntry {
        VertexEntry {
            predecessor: None,
            distance: None,
            is_expanded: false,
        }
    }
}

/// Per-run state of a shortest-path search: the tentative distance and
/// predecessor of every vertex, and the queue of vertices left to expand.
pub struct DijkstraData {
    queue: BinaryHeap<QueueElement>,
    vertices: Vec<VertexEntry>,
}

impl DijkstraData {
    pub fn new(number_of_vertices: usize, source: VertexId) -> DijkstraData {
        let mut data = DijkstraData {
            queue: BinaryHeap::new(),
            vertices: vec![VertexEntry::new(); number_of_vertices],
        };

        data.vertices[source as usize].distance = Some(0);
        data.queue.push(QueueElement::new(0, source));

        data
    }

    /// Pops the unexpanded vertex with the smallest tentative distance.
    ///
    /// An improved distance is pushed without removing the superseded queue
    /// entry, so entries for already expanded vertices are skipped here.
    pub fn pop(&mut self) -> Option<VertexId> {
        while let Some(element) = self.queue.pop() {
            let entry = &mut self.vertices[element.vertex as usize];
            if !entry.is_expanded {
                entry.is_expanded = true;
                return Some(element.vertex);
            }
        }

        None
    }

    /// Relaxes the arc from `tail` to `head`.
    pub fn update(&mut self, tail: VertexId, head: VertexId, arc_weight: Weight) {
        let alternative_distance = self.vertices[tail as usize].distance.unwrap() + arc_weight;

        // A shrinking resize leaves arcs pointing at dropped vertices in
        // the surviving adjacency lists. Such arcs lead nowhere.
        let Some(entry) = self.vertices.get_mut(head as usize) else {
            return;
        };
        if entry.is_expanded {
            return;
        }

        let current_distance = entry.distance.unwrap_or(Weight::MAX);
        if alternative_distance < current_distance {
            entry.predecessor = Some(tail);
            entry.distance = Some(alternative_distance);
            self.queue
                .push(QueueElement::new(alternative_distance, head));
        }
    }

    /// Reconstructs the path to `target` by walking the predecessor links
    /// back to the source. Returns `None` when `target` was never reached.
    pub fn path_to(&self, target: VertexId) -> Option<Path> {
        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.vertices.get(current as usize)?.predecessor {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path {
            weight: self.vertices[target as usize].distance?,
            vertices,
        })
    }
}
