use std::fmt;

use itertools::Itertools;

use super::{
    edge::{TaillessWeightedEdge, WeightedEdge},
    Graph, VertexId, Weight,
};
use crate::error::{Error, Result};

/// Directed weighted graph stored as one edge list per vertex.
///
/// The number of vertices is fixed at construction. An edge list is a sequence, not a set:
/// parallel edges may coexist and every lookup, update or deletion acts on the first entry
/// with a matching head.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyListGraph {
    edges: Vec<Vec<TaillessWeightedEdge>>,
    number_of_edges: u32,
}

impl AdjacencyListGraph {
    pub fn new(number_of_vertices: u32) -> AdjacencyListGraph {
        AdjacencyListGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            number_of_edges: 0,
        }
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<AdjacencyListGraph> {
        let mut graph = AdjacencyListGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge.tail(), edge.head(), edge.weight())?;
        }

        Ok(graph)
    }

    /// Appends an edge from `tail` to `head`, even if one already exists.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(head)?;
        let edges_sharing_tail = self.edges_mut(tail)?;
        edges_sharing_tail.push(TaillessWeightedEdge::new(head, weight));
        self.number_of_edges += 1;

        Ok(())
    }

    /// Removes the first edge from `tail` to `head`.
    pub fn delete_edge(&mut self, tail: VertexId, head: VertexId) -> Result<()> {
        let index = self.position(tail, head)?;
        self.edges_mut(tail)?.remove(index);
        self.number_of_edges -= 1;

        Ok(())
    }

    /// Sets the weight of the first edge from `tail` to `head`.
    pub fn update_edge(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        let index = self.position(tail, head)?;
        self.edges_mut(tail)?[index].set_weight(weight);

        Ok(())
    }

    pub fn has_edge(&self, tail: VertexId, head: VertexId) -> Result<bool> {
        match self.position(tail, head) {
            Ok(_) => Ok(true),
            Err(Error::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Weight of the first edge from `tail` to `head`.
    pub fn edge(&self, tail: VertexId, head: VertexId) -> Result<Weight> {
        let index = self.position(tail, head)?;
        Ok(self.neighbours(tail)?[index].weight())
    }

    fn position(&self, tail: VertexId, head: VertexId) -> Result<usize> {
        self.check_vertex(head)?;
        self.neighbours(tail)?
            .iter()
            .position(|edge| edge.head() == head)
            .ok_or(Error::NotFound { tail, head })
    }

    fn edges_mut(&mut self, tail: VertexId) -> Result<&mut Vec<TaillessWeightedEdge>> {
        self.check_vertex(tail)?;
        Ok(&mut self.edges[tail as usize])
    }
}

impl Graph for AdjacencyListGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.number_of_edges
    }

    fn neighbours(&self, vertex: VertexId) -> Result<&[TaillessWeightedEdge]> {
        self.check_vertex(vertex)?;
        Ok(&self.edges[vertex as usize])
    }
}

impl fmt::Display for AdjacencyListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph with {} vertices and {} directed edges",
            self.number_of_vertices(),
            self.number_of_edges()
        )?;
        writeln!(f, "vertex: (neighbour, weight)")?;
        for (vertex, edges) in self.edges.iter().enumerate() {
            let edges = edges
                .iter()
                .map(|edge| format!("({}, {:.2})", edge.head(), edge.weight()))
                .join(" ");
            writeln!(f, "{}: {}", vertex, edges)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_small_graph() -> AdjacencyListGraph {
        let mut graph = AdjacencyListGraph::new(4);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 2, 4.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph
    }

    #[test]
    fn add_and_lookup() {
        let graph = get_small_graph();

        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_edges(), 4);
        assert!(graph.has_edge(0, 2).unwrap());
        assert!(!graph.has_edge(2, 0).unwrap());
        assert_eq!(graph.edge(1, 2), Ok(2.0));
        assert_eq!(
            graph.edge(3, 0),
            Err(Error::NotFound { tail: 3, head: 0 })
        );
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut graph = get_small_graph();
        let invalid = Err(Error::InvalidArgument {
            vertex: 4,
            number_of_vertices: 4,
        });

        assert_eq!(graph.add_edge(4, 0, 1.0), invalid);
        assert_eq!(graph.add_edge(0, 4, 1.0), invalid);
        assert_eq!(graph.has_edge(0, 4), invalid.map(|_: ()| false));
        assert!(graph.neighbours(4).is_err());
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn parallel_edges_act_on_first_match() {
        let mut graph = AdjacencyListGraph::new(2);
        graph.add_edge(0, 1, 5.0).unwrap();
        graph.add_edge(0, 1, 3.0).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edge(0, 1), Ok(5.0));

        graph.update_edge(0, 1, 7.0).unwrap();
        let weights: Vec<_> = graph
            .neighbours(0)
            .unwrap()
            .iter()
            .map(|edge| edge.weight())
            .collect();
        assert_eq!(weights, vec![7.0, 3.0]);

        graph.delete_edge(0, 1).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(3.0));
        assert_eq!(graph.number_of_edges(), 1);

        graph.delete_edge(0, 1).unwrap();
        assert!(!graph.has_edge(0, 1).unwrap());
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn missing_edges_are_reported() {
        let mut graph = get_small_graph();

        assert_eq!(
            graph.delete_edge(3, 2),
            Err(Error::NotFound { tail: 3, head: 2 })
        );
        assert_eq!(
            graph.update_edge(1, 0, 1.0),
            Err(Error::NotFound { tail: 1, head: 0 })
        );
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn from_edges_keeps_order() {
        let edges = [
            WeightedEdge::new(2, 0, 1.5),
            WeightedEdge::new(0, 1, 2.5),
            WeightedEdge::new(2, 1, 0.5),
        ];
        let graph = AdjacencyListGraph::from_edges(3, &edges).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![edges[1], edges[0], edges[2]]);
        assert!(AdjacencyListGraph::from_edges(2, &edges).is_err());
    }

    #[test]
    fn edges_iterate_in_tail_order() {
        let graph = get_small_graph();
        let edges: Vec<_> = graph
            .edges()
            .map(|edge| (edge.tail(), edge.head()))
            .collect();

        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
    }

    #[test]
    fn display_lists_every_vertex() {
        let rendered = get_small_graph().to_string();

        assert!(rendered.starts_with("graph with 4 vertices and 4 directed edges"));
        assert!(rendered.contains("0: (1, 1.00) (2, 4.00)"));
        assert!(rendered.contains("3: \n"));
    }
}
