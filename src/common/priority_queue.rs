//! Minimum priority queue backing the shortest path search.
//!
//! It is a classic array-backed binary heap. There is no decrease-key
//! operation, the same item can be pushed multiple times with different
//! priorities and the consumer is expected to discard the outdated ones when
//! they are popped.

use crate::core::weight::Weighted;

/// Binary min-heap of items ordered by their priority.
///
/// Items with equal priorities are popped in an order given by the heap
/// structure. If a deterministic order is needed, the tie-break must be a part
/// of the priority itself.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    heap: Vec<Weighted<T, P>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Inserts an item with given priority.
    pub fn push(&mut self, priority: P, item: T) {
        self.heap.push(Weighted(item, priority));
        self.bubble_up(self.heap.len() - 1);
    }

    /// Removes the item with the smallest priority and returns it together with
    /// the priority, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.heap.is_empty() {
            return None;
        }

        let Weighted(item, priority) = self.heap.swap_remove(0);

        if !self.heap.is_empty() {
            self.bubble_down(0);
        }

        Some((priority, item))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.heap[index] >= self.heap[parent] {
                break;
            }

            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        let len = self.heap.len();

        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }

            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
