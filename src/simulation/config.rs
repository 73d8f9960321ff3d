use serde::Serialize;

use crate::{
    error::{Error, Result},
    graphs::{VertexId, Weight},
};

/// Parameters of a Monte Carlo run over random graphs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationConfig {
    /// Number of vertices of every sampled graph.
    pub vertices: u32,
    /// Probability that an unordered pair of vertices is connected.
    pub density: f64,
    pub min_weight: Weight,
    pub max_weight: Weight,
    /// Number of random graphs to average over.
    pub iterations: u32,
    /// Seed of the random number generators. Drawn from the OS if not set.
    pub seed: Option<u64>,
    /// Vertex the shortest paths start from.
    pub source: VertexId,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            vertices: 50,
            density: 0.2,
            min_weight: 1.0,
            max_weight: 10.0,
            iterations: 1,
            seed: None,
            source: 0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.vertices == 0 {
            return Err(Error::InvalidConfig(
                "graphs need at least one vertex".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidConfig(format!(
                "density {} is not in [0, 1]",
                self.density
            )));
        }
        if !self.min_weight.is_finite() || !self.max_weight.is_finite() {
            return Err(Error::InvalidConfig("edge weights must be finite".to_string()));
        }
        if self.min_weight < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "minimum edge weight {} is negative",
                self.min_weight
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidConfig(format!(
                "minimum edge weight {} exceeds maximum edge weight {}",
                self.min_weight, self.max_weight
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig(
                "at least one iteration is needed".to_string(),
            ));
        }
        if self.source >= self.vertices {
            return Err(Error::InvalidConfig(format!(
                "source {} is not one of the {} vertices",
                self.source, self.vertices
            )));
        }

        Ok(())
    }
}
