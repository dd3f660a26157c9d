//! Both representations populated with the same edge set must be
//! semantically indistinguishable: same lookups, same shortest distances for
//! every (source, destination) pair.

use dijkstra_bench::{Dijkstra, GraphBuilder, ListGraph, MatrixGraph, UndirectedGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds a random list graph, then mirrors its exact edge set into a matrix
/// graph.
fn build_pair(vertices: usize, density: f64, seed: u64) -> (ListGraph<u32>, MatrixGraph<u32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list: ListGraph<u32> = ListGraph::new(vertices, density).unwrap();
    GraphBuilder::standard().populate(&mut list, &mut rng);

    let mut matrix: MatrixGraph<u32> = MatrixGraph::new(vertices, density).unwrap();
    for u in 0..vertices {
        for (v, w) in list.neighbors(u) {
            if u < v {
                assert!(matrix.insert_edge(u, v, w));
            }
        }
    }
    assert_eq!(list.edge_count(), matrix.edge_count());
    (list, matrix)
}

#[test]
fn lookups_agree_between_representations() {
    let (list, matrix) = build_pair(15, 0.5, 71);
    for a in 0..15 {
        for b in 0..15 {
            assert_eq!(list.has_edge(a, b), matrix.has_edge(a, b));
            assert_eq!(list.edge_weight(a, b), matrix.edge_weight(a, b));
        }
    }
}

#[test]
fn to_all_distances_agree_for_every_source() {
    let dijkstra = Dijkstra::new();
    for (vertices, density, seed) in [(12, 0.3, 1), (12, 0.8, 2), (20, 1.0, 3)] {
        let (list, matrix) = build_pair(vertices, density, seed);
        for source in 0..vertices {
            let from_list = dijkstra.to_all(&list, source).unwrap();
            let from_matrix = dijkstra.to_all(&matrix, source).unwrap();
            assert_eq!(
                from_list.distances, from_matrix.distances,
                "V = {}, D = {}, source = {}",
                vertices, density, source
            );
        }
    }
}

#[test]
fn to_one_distances_agree_for_every_pair() {
    let dijkstra = Dijkstra::new();
    let (list, matrix) = build_pair(10, 0.4, 8);
    for source in 0..10 {
        for destination in 0..10 {
            if source == destination {
                continue;
            }
            let from_list = dijkstra.to_one(&list, source, destination).unwrap();
            let from_matrix = dijkstra.to_one(&matrix, source, destination).unwrap();
            assert_eq!(from_list.distance(), from_matrix.distance());
        }
    }
}

#[test]
fn complete_graph_reaches_every_pair() {
    let dijkstra = Dijkstra::new();
    let (list, _) = build_pair(5, 1.0, 13);
    for source in 0..5 {
        let result = dijkstra.to_all(&list, source).unwrap();
        for destination in 0..5 {
            assert!(
                result.distance_to(destination).is_some(),
                "complete graph must connect {} and {}",
                source,
                destination
            );
        }
    }
}
