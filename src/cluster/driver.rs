//! Recursive min-cut decomposition driver

use crate::cluster::{ClusteringOutcome, SplitRecord};
use crate::config::Config;
use crate::cut::{pivot, solver};
use crate::error::ClusterError;
use crate::graph::{connectivity, Connectivity, Graph};

/// Decompose a graph into leaf clusters of at most
/// `config.size_threshold` nodes by recursive min-cut splitting.
///
/// Each step consumes one graph: at or below the threshold it becomes
/// a final cluster; a disconnected graph splits into its components
/// (structural split, no record); a connected graph above the
/// threshold is split along a minimum cut between a selected pivot
/// pair, recording a [`SplitRecord`]. Every processed graph first
/// appends its size to the depth stats.
///
/// The recursion runs on an explicit work stack, so pathological
/// inputs with maximally unbalanced cuts cannot exhaust the call
/// stack. Push order preserves depth-first processing order: source
/// side before sink side, components in discovery order.
pub fn decompose(root: Graph, config: &Config) -> Result<ClusteringOutcome, ClusterError> {
    let mut outcome = ClusteringOutcome::default();
    let mut stack = vec![(root, 0usize)];

    while let Some((graph, depth)) = stack.pop() {
        let size = graph.node_count();
        outcome.depth_stats.entry(depth).or_default().push(size);

        if size <= config.size_threshold {
            outcome.clusters.push(graph);
            continue;
        }

        match connectivity::components(&graph) {
            Connectivity::Components(parts) => {
                log::debug!(
                    "graph is disconnected at depth {}, found {} components",
                    depth,
                    parts.len()
                );
                for part in parts.into_iter().rev() {
                    stack.push((part, depth + 1));
                }
            }
            Connectivity::Connected => {
                let (source, sink) = pivot::select_pivot(&graph, config.top_k)?;
                let cut = solver::min_cut(&graph, source, sink)?;

                // A connected graph always yields two non-empty sides;
                // anything else would loop forever on the same graph
                if cut.source_side.is_empty() || cut.sink_side.is_empty() {
                    return Err(ClusterError::PreconditionViolation(format!(
                        "cut between {source} and {sink} left an empty partition"
                    )));
                }

                log::debug!(
                    "cut at depth {}: {} nodes -> {} + {} (cut value {})",
                    depth,
                    size,
                    cut.source_side.node_count(),
                    cut.sink_side.node_count(),
                    cut.cut_value
                );
                outcome.splits.push(SplitRecord {
                    depth,
                    parent_size: size,
                    source_side_size: cut.source_side.node_count(),
                    sink_side_size: cut.sink_side.node_count(),
                    cut_value: cut.cut_value,
                });

                stack.push((cut.sink_side, depth + 1));
                stack.push((cut.source_side, depth + 1));
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridged_triangles() -> Graph {
        Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)])
    }

    #[test]
    fn bridged_triangles_split_once_into_two_leaves() {
        let outcome = decompose(bridged_triangles(), &Config::default()).unwrap();

        assert_eq!(outcome.clusters.len(), 2);
        assert_eq!(outcome.clusters[0].nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(outcome.clusters[1].nodes().collect::<Vec<_>>(), vec![4, 5, 6]);

        assert_eq!(
            outcome.splits,
            vec![SplitRecord {
                depth: 0,
                parent_size: 6,
                source_side_size: 3,
                sink_side_size: 3,
                cut_value: 1,
            }]
        );

        assert_eq!(outcome.depth_stats[&0], vec![6]);
        assert_eq!(outcome.depth_stats[&1], vec![3, 3]);
    }

    #[test]
    fn disconnected_graph_splits_without_a_record() {
        let two_triangles = Graph::from_edges([(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)]);
        let outcome = decompose(two_triangles, &Config::default()).unwrap();

        assert_eq!(outcome.clusters.len(), 2);
        assert!(outcome.splits.is_empty());
        assert_eq!(outcome.depth_stats[&0], vec![6]);
        assert_eq!(outcome.depth_stats[&1], vec![3, 3]);
    }

    #[test]
    fn small_graph_is_emitted_unchanged() {
        let graph = Graph::from_edges([(1, 2), (2, 3)]);
        let outcome = decompose(graph.clone(), &Config::default()).unwrap();

        assert_eq!(outcome.clusters, vec![graph]);
        assert!(outcome.splits.is_empty());
    }

    #[test]
    fn leaves_cover_the_input_exactly_and_respect_the_bound() {
        // A 20-cycle forces several rounds of cutting
        let cycle = Graph::from_edges((0..20).map(|i| (i, (i + 1) % 20)));
        let config = Config::default();
        let outcome = decompose(cycle, &config).unwrap();

        let mut covered: Vec<u32> = outcome.clusters.iter().flat_map(|c| c.nodes()).collect();
        let total = covered.len();
        covered.sort_unstable();
        covered.dedup();
        assert_eq!(covered.len(), total, "a node appeared in two clusters");
        assert_eq!(covered, (0..20).collect::<Vec<_>>());

        for cluster in &outcome.clusters {
            assert!(cluster.node_count() <= config.size_threshold);
        }
    }

    #[test]
    fn identical_inputs_give_identical_outcomes() {
        let build = || {
            Graph::from_edges([
                (1, 2),
                (2, 3),
                (3, 1),
                (3, 4),
                (4, 5),
                (5, 6),
                (6, 4),
                (6, 7),
                (7, 8),
                (8, 9),
                (9, 7),
            ])
        };
        let first = decompose(build(), &Config::default()).unwrap();
        let second = decompose(build(), &Config::default()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn threshold_is_configurable() {
        let config = Config {
            size_threshold: 2,
            ..Config::default()
        };
        let outcome = decompose(bridged_triangles(), &config).unwrap();
        for cluster in &outcome.clusters {
            assert!(cluster.node_count() <= 2);
        }
    }

    #[test]
    fn depth_stats_sizes_sum_per_level() {
        let outcome = decompose(bridged_triangles(), &Config::default()).unwrap();
        // Each level of the split tree re-partitions the same six nodes
        assert_eq!(outcome.depth_stats[&0].iter().sum::<usize>(), 6);
        assert_eq!(outcome.depth_stats[&1].iter().sum::<usize>(), 6);
    }
}
