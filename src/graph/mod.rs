pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod builder;
pub mod traits;

pub use adjacency_list::ListGraph;
pub use adjacency_matrix::MatrixGraph;
pub use traits::UndirectedGraph;

use crate::{Error, Result};

/// Number of undirected edges a graph with `vertices` vertices should hold at
/// the given density fraction: `floor(density * V * (V - 1) / 2)`.
///
/// Density 1.0 yields the complete simple graph; graphs with fewer than two
/// vertices always target zero edges.
pub fn target_edge_count(vertices: usize, density: f64) -> usize {
    if vertices < 2 || density <= 0.0 {
        return 0;
    }
    let max_edges = vertices * (vertices - 1) / 2;
    (density * max_edges as f64).floor() as usize
}

/// Validates a density fraction at construction time, before any graph is
/// built or timed. Rejects NaN and anything outside [0, 1].
pub(crate) fn validate_density(density: f64) -> Result<f64> {
    if density.is_nan() || !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity(density));
    }
    Ok(density)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_edge_count_matches_formula() {
        assert_eq!(target_edge_count(5, 1.0), 10);
        assert_eq!(target_edge_count(4, 0.5), 3);
        assert_eq!(target_edge_count(10, 0.2), 9);
    }

    #[test]
    fn degenerate_inputs_target_zero_edges() {
        assert_eq!(target_edge_count(0, 1.0), 0);
        assert_eq!(target_edge_count(1, 1.0), 0);
        assert_eq!(target_edge_count(100, 0.0), 0);
    }

    #[test]
    fn density_validation_rejects_out_of_range() {
        assert!(validate_density(0.0).is_ok());
        assert!(validate_density(1.0).is_ok());
        assert!(validate_density(-0.1).is_err());
        assert!(validate_density(1.5).is_err());
        assert!(validate_density(f64::NAN).is_err());
    }
}
