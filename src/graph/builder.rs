use log::debug;
use num_traits::{PrimInt, Unsigned};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::fmt::Debug;

use crate::graph::traits::UndirectedGraph;

/// Smallest edge weight the standard builder draws
pub const MIN_WEIGHT: u32 = 1;
/// Largest edge weight the standard builder draws
pub const MAX_WEIGHT: u32 = 20;

/// Draws a uniformly random vertex index in `[0, vertices)`.
pub fn random_vertex<R: Rng + ?Sized>(rng: &mut R, vertices: usize) -> usize {
    rng.gen_range(0..vertices)
}

/// Fills a graph with random simple undirected edges until it reaches its
/// target edge count
///
/// Edges are drawn by rejection sampling: two distinct random endpoints, a
/// retry when the pair is already connected. One weight is drawn per accepted
/// pair and applied to both directions. The RNG is caller-owned so runs can
/// be reproduced with a seeded generator.
#[derive(Debug, Clone)]
pub struct GraphBuilder<W>
where
    W: PrimInt + Unsigned + Debug + SampleUniform,
{
    min_weight: W,
    max_weight: W,
}

impl GraphBuilder<u32> {
    /// Builder with the standard weight range [1, 20]
    pub fn standard() -> Self {
        GraphBuilder {
            min_weight: MIN_WEIGHT,
            max_weight: MAX_WEIGHT,
        }
    }
}

impl<W> GraphBuilder<W>
where
    W: PrimInt + Unsigned + Debug + SampleUniform,
{
    /// Builder drawing weights uniformly from `[min_weight, max_weight]`.
    /// Both bounds must be positive; zero is reserved for "no edge".
    pub fn with_weights(min_weight: W, max_weight: W) -> Self {
        assert!(!min_weight.is_zero(), "edge weights must be positive");
        assert!(min_weight <= max_weight, "empty weight range");
        GraphBuilder {
            min_weight,
            max_weight,
        }
    }

    /// Populates `graph` up to its target edge count and returns the number
    /// of edges inserted.
    ///
    /// Rejection sampling degrades as the graph approaches completeness, so
    /// after too many consecutive rejected draws the builder switches to
    /// sampling the remaining edges directly from the set of absent pairs.
    /// Termination is unconditional for every density in [0, 1].
    pub fn populate<G, R>(&self, graph: &mut G, rng: &mut R) -> usize
    where
        G: UndirectedGraph<W>,
        R: Rng + ?Sized,
    {
        let vertices = graph.vertex_count();
        let target = graph.target_edge_count();
        if vertices < 2 || graph.edge_count() >= target {
            return 0;
        }

        let weight_dist = Uniform::new_inclusive(self.min_weight, self.max_weight);
        let rejection_cap = (64 * (target - graph.edge_count())).max(1024);

        let mut inserted = 0;
        let mut consecutive_rejections = 0;
        while graph.edge_count() < target {
            let first = random_vertex(rng, vertices);
            let mut second = random_vertex(rng, vertices);
            while second == first {
                second = random_vertex(rng, vertices);
            }

            let weight = weight_dist.sample(rng);
            if graph.insert_edge(first, second, weight) {
                inserted += 1;
                consecutive_rejections = 0;
            } else {
                consecutive_rejections += 1;
                if consecutive_rejections >= rejection_cap {
                    inserted += self.fill_from_absent_pairs(graph, rng, &weight_dist);
                    break;
                }
            }
        }
        inserted
    }

    /// Direct combinatorial fallback for near-complete targets: enumerate the
    /// pairs not yet connected and sample the shortfall without replacement.
    fn fill_from_absent_pairs<G, R>(
        &self,
        graph: &mut G,
        rng: &mut R,
        weight_dist: &Uniform<W>,
    ) -> usize
    where
        G: UndirectedGraph<W>,
        R: Rng + ?Sized,
    {
        let vertices = graph.vertex_count();
        let needed = graph.target_edge_count() - graph.edge_count();

        let mut absent = Vec::new();
        for a in 0..vertices {
            for b in (a + 1)..vertices {
                if !graph.has_edge(a, b) {
                    absent.push((a, b));
                }
            }
        }
        debug!(
            "rejection sampling stalled; drawing {} of {} absent pairs directly",
            needed,
            absent.len()
        );

        let mut inserted = 0;
        for idx in rand::seq::index::sample(rng, absent.len(), needed.min(absent.len())) {
            let (a, b) = absent[idx];
            if graph.insert_edge(a, b, weight_dist.sample(rng)) {
                inserted += 1;
            }
        }
        inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ListGraph, MatrixGraph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn complete_graph_terminates_and_hits_target() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut graph: ListGraph<u32> = ListGraph::new(30, 1.0).unwrap();
        GraphBuilder::standard().populate(&mut graph, &mut rng);
        assert_eq!(graph.edge_count(), 30 * 29 / 2);
    }

    #[test]
    fn degenerate_graphs_get_no_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let builder = GraphBuilder::standard();

        let mut single: MatrixGraph<u32> = MatrixGraph::new(1, 1.0).unwrap();
        assert_eq!(builder.populate(&mut single, &mut rng), 0);

        let mut sparse: MatrixGraph<u32> = MatrixGraph::new(6, 0.0).unwrap();
        assert_eq!(builder.populate(&mut sparse, &mut rng), 0);
        assert_eq!(sparse.edge_count(), 0);
    }

    #[test]
    fn weights_stay_in_configured_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut graph: ListGraph<u32> = ListGraph::new(12, 0.8).unwrap();
        GraphBuilder::with_weights(3u32, 5u32).populate(&mut graph, &mut rng);
        for v in 0..12 {
            for (_, w) in graph.neighbors(v) {
                assert!((3..=5).contains(&w));
            }
        }
    }
}
