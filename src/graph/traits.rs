use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Trait representing a weighted undirected simple graph
///
/// Both storage representations implement this trait and must behave
/// identically from the caller's point of view: an inserted edge is visible
/// from both endpoints, self-loops and duplicate edges are rejected, and a
/// weight of zero never appears on a present edge.
pub trait UndirectedGraph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges currently in the graph
    fn edge_count(&self) -> usize;

    /// Returns the density fraction the graph was constructed with
    fn density(&self) -> f64;

    /// Returns the number of edges the graph should hold once populated
    fn target_edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if an edge connects the two vertices (in either order)
    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: usize, b: usize) -> Option<W>;

    /// Returns an iterator over the neighbors of a vertex with edge weights
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Adds an undirected edge, registering it in both directions.
    ///
    /// Returns false without modifying the graph when the edge would be a
    /// self-loop, a duplicate, out of range, or zero-weighted.
    fn insert_edge(&mut self, a: usize, b: usize, weight: W) -> bool;
}
