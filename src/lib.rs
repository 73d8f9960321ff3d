//! Single source shortest paths by Dijkstra's algorithm over directed weighted graphs, and a
//! Monte Carlo simulator that estimates the average shortest path length of random graphs.

pub mod error;
pub mod graphs;
pub(crate) mod queue;
pub mod search;
pub mod simulation;
pub mod utility;

pub use error::{Error, Result};
