use num_traits::{PrimInt, Unsigned};
use std::fmt::{self, Debug, Display};

use crate::graph::traits::UndirectedGraph;
use crate::graph::{target_edge_count, validate_density};
use crate::Result;

/// An undirected graph stored as a dense V x V weight matrix
///
/// A zero entry means "no edge"; valid edge weights are strictly positive, so
/// the two cannot collide. Edge lookup and insertion are O(1), neighbor
/// enumeration scans a full row, and memory is O(V^2) regardless of how many
/// edges are present.
#[derive(Debug, Clone)]
pub struct MatrixGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Row-major V x V weight grid, zero meaning absent
    weights: Vec<W>,

    /// Number of vertices
    vertices: usize,

    /// Density fraction supplied at construction
    density: f64,

    /// Number of undirected edges inserted so far
    edges: usize,
}

impl<W> MatrixGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates an empty graph with `vertices` vertices and the given target
    /// density. Fails if the density is outside [0, 1].
    pub fn new(vertices: usize, density: f64) -> Result<Self> {
        let density = validate_density(density)?;
        Ok(MatrixGraph {
            weights: vec![W::zero(); vertices * vertices],
            vertices,
            density,
            edges: 0,
        })
    }

    fn cell(&self, row: usize, col: usize) -> W {
        self.weights[row * self.vertices + col]
    }
}

impl<W> UndirectedGraph<W> for MatrixGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn target_edge_count(&self) -> usize {
        target_edge_count(self.vertices, self.density)
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        a < self.vertices && b < self.vertices && !self.cell(a, b).is_zero()
    }

    fn edge_weight(&self, a: usize, b: usize) -> Option<W> {
        if !self.has_edge(a, b) {
            return None;
        }
        Some(self.cell(a, b))
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if vertex >= self.vertices {
            return Box::new(std::iter::empty());
        }
        let row = &self.weights[vertex * self.vertices..(vertex + 1) * self.vertices];
        Box::new(
            row.iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(v, &w)| (v, w)),
        )
    }

    fn insert_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        if a == b
            || a >= self.vertices
            || b >= self.vertices
            || weight.is_zero()
            || !self.cell(a, b).is_zero()
        {
            return false;
        }
        self.weights[a * self.vertices + b] = weight;
        self.weights[b * self.vertices + a] = weight;
        self.edges += 1;
        true
    }
}

impl<W> Display for MatrixGraph<W>
where
    W: PrimInt + Unsigned + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "MatrixGraph: {} vertices, {} edges",
            self.vertices, self.edges
        )?;
        for row in 0..self.vertices {
            write!(f, "{:>4}:", row)?;
            for col in 0..self.vertices {
                write!(f, " {:>3}", self.cell(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
