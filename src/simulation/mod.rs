pub mod config;
pub mod sampler;
pub mod simulator;

pub use config::SimulationConfig;
pub use sampler::GraphSampler;
pub use simulator::{SimulationReport, Simulator};
