use rand::{distributions::Uniform, prelude::*};

use super::config::SimulationConfig;
use crate::{
    error::Result,
    graphs::adjacency_list_graph::AdjacencyListGraph,
};

/// Builds random undirected graphs, stored as pairs of opposite directed edges.
///
/// Each unordered pair of vertices is connected with probability `density`, the weight is
/// drawn uniformly from `[min_weight, max_weight]`. Edge existence and edge weights come
/// from two separate generators, both derived from one seed.
pub struct GraphSampler {
    vertices: u32,
    density: f64,
    weights: Uniform<f64>,
    edge_rng: StdRng,
    weight_rng: StdRng,
}

impl GraphSampler {
    pub fn new(config: &SimulationConfig, seed: u64) -> Result<GraphSampler> {
        config.validate()?;

        let mut edge_rng = StdRng::seed_from_u64(seed);
        let weight_rng = StdRng::seed_from_u64(edge_rng.gen());
        Ok(GraphSampler {
            vertices: config.vertices,
            density: config.density,
            weights: Uniform::new_inclusive(config.min_weight, config.max_weight),
            edge_rng,
            weight_rng,
        })
    }

    pub fn sample(&mut self) -> Result<AdjacencyListGraph> {
        let mut graph = AdjacencyListGraph::new(self.vertices);
        for tail in 0..self.vertices {
            for head in (tail + 1)..self.vertices {
                if self.edge_rng.gen::<f64>() < self.density {
                    let weight = self.weight_rng.sample(&self.weights);
                    graph.add_edge(tail, head, weight)?;
                    graph.add_edge(head, tail, weight)?;
                }
            }
        }

        Ok(graph)
    }
}
