//! Cluster statistics and metrics

use rayon::prelude::*;

use crate::graph::Graph;

/// Node count above which density is computed in parallel
const PARALLEL_THRESHOLD: usize = 1000;

/// Calculate cluster density: internal edges over potential edges
/// (`n * (n - 1) / 2` for an undirected graph). Singleton and empty
/// clusters have density 1 by convention.
pub fn cluster_density(cluster: &Graph) -> f32 {
    let n = cluster.node_count();
    if n <= 1 {
        return 1.0;
    }

    let potential_edges = n * (n - 1) / 2;

    // Leaf clusters are tiny; the parallel path only matters when the
    // caller measures larger intermediate graphs
    let degree_sum: usize = if n < PARALLEL_THRESHOLD {
        cluster.nodes().map(|node| cluster.degree(node)).sum()
    } else {
        let nodes: Vec<u32> = cluster.nodes().collect();
        nodes.par_iter().map(|&node| cluster.degree(node)).sum()
    };

    // Every undirected edge contributes to two degrees
    let actual_edges = degree_sum / 2;

    actual_edges as f32 / potential_edges as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_triangle_has_density_one() {
        let triangle = Graph::from_edges([(1, 2), (2, 3), (3, 1)]);
        assert_eq!(cluster_density(&triangle), 1.0);
    }

    #[test]
    fn path_of_three_has_two_thirds_density() {
        let path = Graph::from_edges([(1, 2), (2, 3)]);
        let density = cluster_density(&path);
        assert!((density - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn singleton_density_is_one_by_convention() {
        let mut graph = Graph::new();
        graph.add_node(1);
        assert_eq!(cluster_density(&graph), 1.0);
    }

    #[test]
    fn large_cluster_uses_the_parallel_path() {
        // A 1200-node star exercises the rayon branch
        let star = Graph::from_edges((1..1200u32).map(|i| (0, i)));
        let n = star.node_count();
        let expected = (n - 1) as f32 / (n * (n - 1) / 2) as f32;
        assert!((cluster_density(&star) - expected).abs() < 1e-9);
    }
}
