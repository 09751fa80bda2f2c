//! Deterministic timer queue.
//!
//! Events pop in `(due, insertion order)` order, so two events due at the same
//! instant fire in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<E> {
    due_ms: f64,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    // reversed: BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Timeline<E> {
    heap: BinaryHeap<Entry<E>>,
    next_seq: u64,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<E> Timeline<E> {
    pub fn schedule(&mut self, due_ms: f64, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due_ms, seq, event });
    }

    /// Pop the earliest event if it is due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, E)> {
        if self.heap.peek()?.due_ms > now_ms {
            return None;
        }
        self.heap.pop().map(|e| (e.due_ms, e.event))
    }

    pub fn next_due(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.due_ms)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_then_insertion_order() {
        let mut t = Timeline::default();
        t.schedule(50.0, "c");
        t.schedule(10.0, "a");
        t.schedule(10.0, "b");
        assert_eq!(t.next_due(), Some(10.0));
        assert_eq!(t.pop_due(5.0), None);
        assert_eq!(t.pop_due(100.0), Some((10.0, "a")));
        assert_eq!(t.pop_due(100.0), Some((10.0, "b")));
        assert_eq!(t.pop_due(49.9), None);
        assert_eq!(t.pop_due(50.0), Some((50.0, "c")));
        assert!(t.is_empty());
    }
}
