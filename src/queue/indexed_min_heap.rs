use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::QueueElement;
use crate::{
    error::{Error, Result},
    graphs::Weight,
};

/// Binary min-heap with a side index from id to heap slot.
///
/// The index gives O(1) membership tests and lets `update_key` find an element without
/// scanning, which is what Dijkstra's decrease-key needs. Ids are unique. Equal keys are
/// never swapped, so among ties the element that got its key first tends to stay in front.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<K> {
    elements: Vec<QueueElement<K>>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> Default for IndexedMinHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> IndexedMinHeap<K> {
    pub fn new() -> IndexedMinHeap<K> {
        IndexedMinHeap {
            elements: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> IndexedMinHeap<K> {
        IndexedMinHeap {
            elements: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: K) -> bool {
        self.index.contains_key(&id)
    }

    /// Current key of `id`, if it is queued.
    pub fn key(&self, id: K) -> Option<Weight> {
        self.index.get(&id).map(|&slot| self.elements[slot].key)
    }

    /// Inserts `id`. An id that is already queued gets its key replaced instead.
    pub fn push(&mut self, id: K, key: Weight) {
        if self.contains(id) {
            self.update_key(id, key);
            return;
        }

        let slot = self.elements.len();
        self.elements.push(QueueElement::new(id, key));
        self.index.insert(id, slot);
        self.sift_up(slot);
    }

    pub fn peek(&self) -> Result<QueueElement<K>> {
        self.elements.first().copied().ok_or(Error::EmptyStructure)
    }

    pub fn pop(&mut self) -> Result<QueueElement<K>> {
        if self.elements.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let min = self.elements.swap_remove(0);
        self.index.remove(&min.id);
        if let Some(root) = self.elements.first() {
            self.index.insert(root.id, 0);
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Sets the key of `id`, inserting it if it is not queued.
    pub fn update_key(&mut self, id: K, key: Weight) {
        let Some(&slot) = self.index.get(&id) else {
            self.push(id, key);
            return;
        };

        let old_key = self.elements[slot].key;
        self.elements[slot].key = key;
        if key > old_key {
            self.sift_down(slot);
        } else {
            self.sift_up(slot);
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.elements[parent].key <= self.elements[slot].key {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            if left >= self.elements.len() {
                break;
            }

            let mut smaller_child = left;
            if right < self.elements.len()
                && self.elements[right].key < self.elements[left].key
            {
                smaller_child = right;
            }

            if self.elements[smaller_child].key >= self.elements[slot].key {
                break;
            }
            self.swap(slot, smaller_child);
            slot = smaller_child;
        }
    }

    // Keeps the index in step with the element array.
    fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
        self.index.insert(self.elements[a].id, a);
        self.index.insert(self.elements[b].id, b);
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.elements.len(), self.index.len());
        for (slot, element) in self.elements.iter().enumerate() {
            assert_eq!(self.index.get(&element.id), Some(&slot));
            if slot > 0 {
                assert!(self.elements[(slot - 1) / 2].key <= element.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn pops_in_key_order() {
        let mut heap = IndexedMinHeap::new();
        for (id, key) in [(0u32, 5.0), (1, 3.0), (2, 8.0), (3, 1.0), (4, 4.0)] {
            heap.push(id, key);
            heap.assert_invariants();
        }

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Ok(QueueElement::new(3, 1.0)));

        let mut order = Vec::new();
        while !heap.is_empty() {
            order.push(heap.pop().unwrap().id);
            heap.assert_invariants();
        }
        assert_eq!(order, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn empty_heap_reports_error() {
        let mut heap = IndexedMinHeap::<u32>::new();

        assert_eq!(heap.peek(), Err(Error::EmptyStructure));
        assert_eq!(heap.pop(), Err(Error::EmptyStructure));

        heap.push(7, 1.0);
        heap.pop().unwrap();
        assert_eq!(heap.pop(), Err(Error::EmptyStructure));
    }

    #[test]
    fn decrease_and_increase_key() {
        let mut heap = IndexedMinHeap::new();
        for id in 0u32..6 {
            heap.push(id, f64::INFINITY);
        }
        heap.update_key(5, 2.0);
        heap.assert_invariants();
        assert_eq!(heap.peek().unwrap().id, 5);

        heap.update_key(3, 1.0);
        assert_eq!(heap.peek().unwrap().id, 3);

        heap.update_key(3, 10.0);
        heap.assert_invariants();
        assert_eq!(heap.peek().unwrap().id, 5);
        assert_eq!(heap.key(3), Some(10.0));
    }

    #[test]
    fn update_key_of_absent_id_pushes() {
        let mut pushed = IndexedMinHeap::new();
        let mut updated = IndexedMinHeap::new();
        for (id, key) in [(0u32, 4.0), (1, 2.0), (2, 9.0)] {
            pushed.push(id, key);
            updated.update_key(id, key);
        }

        assert_eq!(pushed.elements, updated.elements);
        assert!(updated.contains(2));
        assert!(!updated.contains(3));
    }

    #[test]
    fn pushing_a_queued_id_keeps_it_unique() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1u32, 3.0);
        heap.push(1, 1.0);

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.key(1), Some(1.0));
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut heap = IndexedMinHeap::new();
        heap.push(0u32, 1.0);
        heap.push(1, 1.0);
        heap.push(2, 1.0);

        assert_eq!(heap.peek().unwrap().id, 0);
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Push(u8, f64),
        Pop,
        UpdateKey(u8, f64),
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            (any::<u8>(), 0.0..1000.0f64).prop_map(|(id, key)| Operation::Push(id, key)),
            Just(Operation::Pop),
            (any::<u8>(), 0.0..1000.0f64).prop_map(|(id, key)| Operation::UpdateKey(id, key)),
        ]
    }

    proptest! {
        #[test]
        fn peek_is_always_the_minimum(operations in prop::collection::vec(operation(), 0..200)) {
            let mut heap = IndexedMinHeap::new();
            let mut reference: HashMap<u8, f64> = HashMap::new();

            for operation in operations {
                match operation {
                    Operation::Push(id, key) => {
                        heap.push(id, key);
                        reference.insert(id, key);
                    }
                    Operation::UpdateKey(id, key) => {
                        heap.update_key(id, key);
                        reference.insert(id, key);
                    }
                    Operation::Pop => match heap.pop() {
                        Ok(element) => {
                            let min = reference.values().copied().fold(f64::INFINITY, f64::min);
                            prop_assert_eq!(element.key, min);
                            prop_assert_eq!(reference.remove(&element.id), Some(element.key));
                        }
                        Err(err) => {
                            prop_assert_eq!(err, Error::EmptyStructure);
                            prop_assert!(reference.is_empty());
                        }
                    },
                }

                heap.assert_invariants();
                prop_assert_eq!(heap.len(), reference.len());
                if let Ok(top) = heap.peek() {
                    let min = reference.values().copied().fold(f64::INFINITY, f64::min);
                    prop_assert_eq!(top.key, min);
                }
            }
        }
    }
}
