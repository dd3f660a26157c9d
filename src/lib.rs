//! Dijkstra Bench - shortest-path benchmarking over two graph representations
//!
//! This library benchmarks classic Dijkstra single-source shortest paths on
//! random weighted undirected graphs stored either as adjacency lists or as a
//! dense adjacency matrix. Both representations expose the same capability
//! trait and must produce identical distances; the benchmark measures how the
//! storage choice affects query latency in two modes (source to all vertices,
//! source to one chosen destination).

pub mod algorithm;
pub mod bench;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathResult, TargetOutcome};
pub use bench::{BenchConfig, BenchReport, BenchmarkRunner, Representation};
pub use graph::builder::GraphBuilder;
/// Re-export main types for convenient use
pub use graph::{ListGraph, MatrixGraph, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("Vertex {vertex} out of range for a graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("Source and destination must be distinct (both are {0})")]
    IdenticalEndpoints(usize),

    #[error("Benchmarking needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("Trial count must be at least 1")]
    NoTrials,

    #[error("No connected source/destination pair found after {attempts} attempts")]
    DisconnectedGraph { attempts: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
