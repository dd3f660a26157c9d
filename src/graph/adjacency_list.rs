use num_traits::{PrimInt, Unsigned};
use std::fmt::{self, Debug, Display};

use crate::graph::traits::UndirectedGraph;
use crate::graph::{target_edge_count, validate_density};
use crate::Result;

/// An undirected graph stored as per-vertex adjacency lists
///
/// Insertion is O(1) amortized per direction; the duplicate-edge check walks
/// one vertex's list, so it costs O(degree). Memory scales with the number of
/// edges actually present, which makes this the representation of choice for
/// sparse graphs.
#[derive(Debug, Clone)]
pub struct ListGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Neighbors of each vertex: vertex -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Density fraction supplied at construction, kept to derive the target
    /// edge count
    density: f64,

    /// Number of undirected edges inserted so far
    edges: usize,
}

impl<W> ListGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates an empty graph with `vertices` vertices and the given target
    /// density. Fails if the density is outside [0, 1].
    pub fn new(vertices: usize, density: f64) -> Result<Self> {
        let density = validate_density(density)?;
        Ok(ListGraph {
            adjacency: vec![Vec::new(); vertices],
            density,
            edges: 0,
        })
    }
}

impl<W> UndirectedGraph<W> for ListGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn target_edge_count(&self) -> usize {
        target_edge_count(self.adjacency.len(), self.density)
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |list| list.iter().any(|&(v, _)| v == b))
    }

    fn edge_weight(&self, a: usize, b: usize) -> Option<W> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|&&(v, _)| v == b)
            .map(|&(_, w)| w)
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(list) => Box::new(list.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn insert_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        if a == b
            || !self.has_vertex(a)
            || !self.has_vertex(b)
            || weight.is_zero()
            || self.has_edge(a, b)
        {
            return false;
        }
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
        self.edges += 1;
        true
    }
}

impl<W> Display for ListGraph<W>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ListGraph: {} vertices, {} edges",
            self.adjacency.len(),
            self.edges
        )?;
        for (vertex, list) in self.adjacency.iter().enumerate() {
            write!(f, "{:>4}:", vertex)?;
            for &(neighbor, weight) in list {
                write!(f, " {}({})", neighbor, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
