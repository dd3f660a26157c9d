use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Result of a source-to-all shortest path computation
///
/// `None` in `distances` marks a vertex the source cannot reach; there is no
/// numeric infinity sentinel, so any weight type and graph size report
/// unreachability the same way.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Shortest distance from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex the computation started from
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Shortest distance to `target`, or `None` if it is unreachable
    pub fn distance_to(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Reconstructs the shortest path from the source to `target` by walking
    /// predecessor links backwards, source first. Returns `None` when the
    /// target is out of range or unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            // A reachable vertex always has a predecessor chain back to the
            // source, and the chain cannot be longer than the vertex count.
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Outcome of a source-to-one shortest path query
///
/// Unreachability is a first-class outcome here, never a sentinel distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// The destination was reached at the given total distance; the path runs
    /// from the source to the destination inclusive
    Reached { distance: W, path: Vec<usize> },

    /// No path connects the source to the destination
    Unreachable,
}

impl<W> TargetOutcome<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// The finalized distance, or `None` when unreachable
    pub fn distance(&self) -> Option<W> {
        match self {
            TargetOutcome::Reached { distance, .. } => Some(*distance),
            TargetOutcome::Unreachable => None,
        }
    }

    /// Returns true when the destination was reached
    pub fn is_reached(&self) -> bool {
        matches!(self, TargetOutcome::Reached { .. })
    }
}
