use std::fmt;

use log::{debug, info, warn};
use serde::Serialize;

use super::{config::SimulationConfig, sampler::GraphSampler};
use crate::{
    error::Result,
    graphs::{adjacency_list_graph::AdjacencyListGraph, Weight},
    search::ShortestPath,
    utility::get_progressbar_long_jobs,
};

/// Outcome of a Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    /// Seed that reproduces the run.
    pub seed: u64,
    pub iterations: u32,
    /// Iterations in which the source reached at least one other vertex.
    pub connected_iterations: u32,
    /// Mean of the per graph average path lengths over the connected iterations. Infinite
    /// if there were none.
    pub average_path_length: Weight,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "average path length (density={}) over {} random graphs: {:.3} ({} connected)",
            self.config.density,
            self.iterations,
            self.average_path_length,
            self.connected_iterations
        )
    }
}

/// Estimates the average shortest path length of random graphs.
pub struct Simulator {
    config: SimulationConfig,
    seed: u64,
    sampler: GraphSampler,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Simulator> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "simulating {} vertices with density {} and weights in [{}, {}], seed {}",
            config.vertices, config.density, config.min_weight, config.max_weight, seed
        );
        let sampler = GraphSampler::new(&config, seed)?;

        Ok(Simulator {
            config,
            seed,
            sampler,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the next random graph.
    pub fn sample(&mut self) -> Result<AdjacencyListGraph> {
        self.sampler.sample()
    }

    /// Shortest paths from the configured source over `graph`.
    pub fn solve<'g>(&self, graph: &'g AdjacencyListGraph) -> Result<ShortestPath<'g>> {
        let mut shortest_path = ShortestPath::new(graph, self.config.source);
        shortest_path.compute()?;
        Ok(shortest_path)
    }

    /// Averages the average path length over `iterations` fresh random graphs.
    pub fn run(&mut self) -> Result<SimulationReport> {
        let iterations = self.config.iterations;
        let bar = get_progressbar_long_jobs("sampling graphs", iterations as u64);

        let mut connected_iterations = 0;
        let mut sum = 0.0;
        for iteration in 0..iterations {
            let graph = self.sample()?;
            let average_path_length = self.solve(&graph)?.average_path_length();
            bar.inc(1);

            if !average_path_length.is_finite() {
                debug!("iteration {}: source is isolated, skipping", iteration);
                continue;
            }
            connected_iterations += 1;
            sum += average_path_length;
        }
        bar.finish_and_clear();

        if connected_iterations == 0 {
            warn!("source was isolated in all {} graphs", iterations);
        }
        let average_path_length = if connected_iterations == 0 {
            Weight::INFINITY
        } else {
            sum / connected_iterations as Weight
        };

        Ok(SimulationReport {
            config: self.config.clone(),
            seed: self.seed,
            iterations,
            connected_iterations,
            average_path_length,
        })
    }
}
