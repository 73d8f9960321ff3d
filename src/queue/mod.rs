use crate::graphs::Weight;

pub mod indexed_min_heap;

/// An element of a priority queue. Lower keys are popped first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueueElement<K> {
    pub id: K,
    pub key: Weight,
}

impl<K> QueueElement<K> {
    pub fn new(id: K, key: Weight) -> QueueElement<K> {
        QueueElement { id, key }
    }
}
