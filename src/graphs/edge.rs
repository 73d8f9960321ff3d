use super::{VertexId, Weight};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessWeightedEdge {
        TaillessWeightedEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// An entry of an adjacency list. The tail is the vertex owning the list.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TaillessWeightedEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessWeightedEdge {
    pub fn new(head: VertexId, weight: Weight) -> TaillessWeightedEdge {
        TaillessWeightedEdge { head, weight }
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge::new(tail, self.head, self.weight)
    }
}
