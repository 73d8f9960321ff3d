use thiserror::Error;

use crate::graphs::VertexId;

/// Errors reported by graph, queue and search operations.
///
/// All of them are caller-usage errors. They are raised at the call that triggers them and
/// never leave the structure in a modified state.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A vertex id is outside of `0..number_of_vertices`.
    #[error("vertex {vertex} is not in the graph (number of vertices is {number_of_vertices})")]
    InvalidArgument {
        vertex: VertexId,
        number_of_vertices: u32,
    },

    /// No edge from `tail` to `head` exists.
    #[error("no edge from {tail} to {head}")]
    NotFound { tail: VertexId, head: VertexId },

    /// `pop` or `peek` on an empty queue.
    #[error("queue is empty")]
    EmptyStructure,

    /// Simulation parameters were rejected.
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
