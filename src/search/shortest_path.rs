use std::fmt;

use log::debug;

use super::path::Path;
use crate::{
    error::{Error, Result},
    graphs::{Graph, VertexId, Weight},
    queue::{indexed_min_heap::IndexedMinHeap, QueueElement},
};

/// Single source shortest paths by Dijkstra's algorithm.
///
/// The engine is bound to a graph and a source vertex. [`ShortestPath::compute`] fills the
/// distance and predecessor arrays for every vertex; afterwards distances, paths and the
/// average path length can be queried. Changing the source with
/// [`ShortestPath::set_source`] discards the result until `compute` is called again.
pub struct ShortestPath<'a> {
    graph: &'a dyn Graph,
    source: VertexId,
    distances: Vec<Weight>,
    predecessors: Vec<Option<VertexId>>,
    is_solved: bool,
}

impl<'a> ShortestPath<'a> {
    pub fn new(graph: &'a dyn Graph, source: VertexId) -> ShortestPath<'a> {
        let number_of_vertices = graph.number_of_vertices() as usize;
        ShortestPath {
            graph,
            source,
            distances: vec![Weight::INFINITY; number_of_vertices],
            predecessors: vec![None; number_of_vertices],
            is_solved: false,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn set_source(&mut self, source: VertexId) {
        self.source = source;
        self.reset();
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    pub fn is_solved(&self) -> bool {
        self.is_solved
    }

    fn reset(&mut self) {
        self.distances.fill(Weight::INFINITY);
        self.predecessors.fill(None);
        self.is_solved = false;
    }

    /// Computes the distances from the source to all vertices.
    ///
    /// Every vertex is queued once up front with its initial distance. Relaxations only
    /// touch vertices that are still queued, so a finalized vertex is never inserted again.
    pub fn compute(&mut self) -> Result<()> {
        self.check_vertex(self.source)?;
        let graph = self.graph;
        self.reset();
        self.distances[self.source as usize] = 0.0;

        let mut queue = IndexedMinHeap::with_capacity(self.distances.len());
        for (vertex, &distance) in self.distances.iter().enumerate() {
            queue.push(vertex as VertexId, distance);
        }

        while !queue.is_empty() {
            let QueueElement {
                id: tail,
                key: distance_tail,
            } = queue.pop()?;

            for edge in graph.neighbours(tail)? {
                let head = edge.head();
                if !queue.contains(head) {
                    continue;
                }

                let alternative_distance_head = distance_tail + edge.weight();
                if alternative_distance_head < self.distances[head as usize] {
                    self.distances[head as usize] = alternative_distance_head;
                    self.predecessors[head as usize] = Some(tail);
                    queue.update_key(head, alternative_distance_head);
                }
            }
        }

        self.is_solved = true;
        debug!(
            "solved shortest paths from {}, {} of {} vertices reachable",
            self.source,
            self.reachable_vertices(),
            self.number_of_vertices()
        );

        Ok(())
    }

    /// Distance from the source to `target`, `f64::INFINITY` if it is unreachable.
    pub fn distance(&self, target: VertexId) -> Result<Weight> {
        self.check_vertex(target)?;
        Ok(self.distances[target as usize])
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn predecessor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        self.check_vertex(vertex)?;
        Ok(self.predecessors[vertex as usize])
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Number of vertices other than the source with a finite distance.
    pub fn reachable_vertices(&self) -> usize {
        self.reachable_distances().count()
    }

    /// Mean distance over all reachable vertices except the source. Infinite if the source
    /// reaches no other vertex.
    pub fn average_path_length(&self) -> Weight {
        let (count, total_distance) = self
            .reachable_distances()
            .fold((0usize, 0.0), |(count, total), distance| {
                (count + 1, total + distance)
            });

        if count == 0 {
            return Weight::INFINITY;
        }
        total_distance / count as Weight
    }

    fn reachable_distances(&self) -> impl Iterator<Item = Weight> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(move |&(vertex, distance)| {
                vertex != self.source as usize && distance.is_finite()
            })
            .map(|(_, &distance)| distance)
    }

    /// Walks the predecessor links from `target` towards the source, yielding `target`
    /// first. The walk ends at the first vertex without a predecessor.
    pub fn predecessor_walk(&self, target: VertexId) -> Result<PredecessorWalk<'_>> {
        self.check_vertex(target)?;
        Ok(PredecessorWalk {
            predecessors: &self.predecessors,
            next: Some(target),
        })
    }

    /// Shortest path from the source to `target`, `None` if there is none.
    pub fn path(&self, target: VertexId) -> Result<Option<Path>> {
        let distance = self.distance(target)?;
        if !distance.is_finite() {
            return Ok(None);
        }

        let mut vertices: Vec<VertexId> = self.predecessor_walk(target)?.collect();
        if vertices.last() != Some(&self.source) {
            return Ok(None);
        }
        vertices.reverse();

        Ok(Some(Path { vertices, distance }))
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.number_of_vertices() {
            return Err(Error::InvalidArgument {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }

        Ok(())
    }
}

pub struct PredecessorWalk<'a> {
    predecessors: &'a [Option<VertexId>],
    next: Option<VertexId>,
}

impl<'a> Iterator for PredecessorWalk<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.predecessors[current as usize];
        Some(current)
    }
}

impl fmt::Display for ShortestPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "shortest paths from vertex {}", self.source)?;
        for target in 0..self.number_of_vertices() {
            if target == self.source {
                continue;
            }
            match self.path(target) {
                Ok(Some(path)) => writeln!(f, "{}", path)?,
                _ => writeln!(f, "no path from {} to {}", self.source, target)?,
            }
        }
        writeln!(f, "average path length: {:.3}", self.average_path_length())
    }
}
