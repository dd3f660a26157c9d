use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathResult, TargetOutcome};
use crate::data_structures::MinHeap;
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over either graph representation
///
/// Neighbor enumeration goes through [`UndirectedGraph::neighbors`], so the
/// same relaxation loop serves both the adjacency-list and adjacency-matrix
/// storage. Two query modes: [`Dijkstra::to_all`] settles every reachable
/// vertex, [`Dijkstra::to_one`] stops as soon as the destination is settled.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra instance
    pub fn new() -> Self {
        Dijkstra
    }

    fn check_vertex<W, G>(graph: &G, vertex: usize) -> Result<()>
    where
        W: PrimInt + Unsigned + Debug,
        G: UndirectedGraph<W>,
    {
        if !graph.has_vertex(vertex) {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertices: graph.vertex_count(),
            });
        }
        Ok(())
    }

    /// Computes shortest paths from `source` to every vertex.
    ///
    /// Runs until the queue is empty; unreachable vertices keep `None` for
    /// both distance and predecessor.
    pub fn to_all<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: PrimInt + Unsigned + Debug,
        G: UndirectedGraph<W>,
    {
        Self::check_vertex(graph, source)?;

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: a shorter path to u was already settled
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.neighbors(u) {
                let candidate = dist_u + weight;
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }

    /// Computes the shortest path from `source` to one chosen `destination`.
    ///
    /// Identical endpoints are rejected; the caller owns resampling. The loop
    /// short-circuits once the destination is popped from the queue, at which
    /// point its distance is final. An unreachable destination is reported as
    /// [`TargetOutcome::Unreachable`], not as an error and not as a number.
    pub fn to_one<W, G>(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
    ) -> Result<TargetOutcome<W>>
    where
        W: PrimInt + Unsigned + Debug,
        G: UndirectedGraph<W>,
    {
        Self::check_vertex(graph, source)?;
        Self::check_vertex(graph, destination)?;
        if source == destination {
            return Err(Error::IdenticalEndpoints(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if u == destination {
                break;
            }
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.neighbors(u) {
                let candidate = dist_u + weight;
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        let partial = ShortestPathResult {
            distances,
            predecessors,
            source,
        };
        match (
            partial.distance_to(destination),
            partial.path_to(destination),
        ) {
            (Some(distance), Some(path)) => Ok(TargetOutcome::Reached { distance, path }),
            _ => Ok(TargetOutcome::Unreachable),
        }
    }
}
