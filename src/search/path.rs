use std::fmt;

use itertools::Itertools;

use crate::graphs::{VertexId, Weight};

/// A path through a graph, from its first to its last vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Weight,
}

impl Path {
    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(source), Some(target)) = (self.source(), self.target()) {
            write!(f, "{}->{} ", source, target)?;
        }
        write!(
            f,
            "(total distance: {:.2}) [{}]",
            self.distance,
            self.vertices.iter().join("->")
        )
    }
}
