use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-oriented priority queue for Dijkstra's tentative-distance ordering
///
/// Wraps the standard max-heap with `Reverse` so the smallest priority pops
/// first. Entries are (priority, item) so ties on priority fall back to the
/// item's own ordering; stale entries are tolerated and filtered by the
/// caller.
#[derive(Debug, Default)]
pub struct MinHeap<T, P>
where
    T: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, T)>>,
}

impl<T, P> MinHeap<T, P>
where
    T: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates an empty queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, including stale ones
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues an item at the given priority
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(T, P)> {
        self.heap
            .peek()
            .map(|&Reverse((priority, item))| (item, priority))
    }
}
