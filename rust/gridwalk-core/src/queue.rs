use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Items that can be ordered by a floating point priority key.
pub trait Prioritized {
    fn priority(&self) -> f32;
}

struct Entry<T> {
    key: f32,
    // Monotonic insertion counter; equal keys pop first-in first-out
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        other.key.total_cmp(&self.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue over [`Prioritized`] items.
///
/// The key is sampled once at insertion. Items with equal keys come out in
/// the order they went in, which keeps searches reproducible.
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new(), seq: 0 }
    }
}

impl<T: Prioritized> MinQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        let key = item.priority();
        self.heap.push(Entry { key, seq: self.seq, item });
        self.seq = self.seq.wrapping_add(1);
    }

    /// Remove and return the item with the smallest key.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
