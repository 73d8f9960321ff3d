use crate::error::{Error, Result};

pub mod adjacency_list_graph;
pub mod edge;

use edge::{TaillessWeightedEdge, WeightedEdge};

pub type VertexId = u32;
pub type Weight = f64;

/// Read side of a directed weighted graph over the vertices `0..number_of_vertices()`.
///
/// Weights are expected to be non-negative. Nothing checks this, shortest path searches
/// over negative weights are simply wrong.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.neighbours(vertex).map_or(0, |edges| edges.len() as u32))
            .sum::<u32>()
    }

    /// Outgoing edges of `vertex` in insertion order.
    fn neighbours(&self, vertex: VertexId) -> Result<&[TaillessWeightedEdge]>;

    /// All edges, ordered by tail and then by insertion order.
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_> {
        Box::new((0..self.number_of_vertices()).flat_map(move |tail| {
            self.neighbours(tail)
                .unwrap_or_default()
                .iter()
                .map(move |edge| edge.set_tail(tail))
        }))
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
