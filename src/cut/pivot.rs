//! Source/sink pivot selection for min-cut splits

use std::collections::{BTreeMap, VecDeque};

use itertools::Itertools;

use crate::error::ClusterError;
use crate::graph::Graph;

/// Choose a (source, sink) pair for a min-cut split on a connected
/// graph with at least two nodes.
///
/// Nodes are ranked by degree descending (ties by node id ascending)
/// and the top `top_k` become candidates (`top_k` is clamped to the
/// node count). Among all candidate pairs, the pair at maximum BFS
/// distance wins; distance ties go to the smallest (source, sink)
/// pair under node-id order. High-degree nodes anchor dense regions,
/// so maximizing their separation steers the cut toward a community
/// boundary instead of through a hub's neighborhood.
pub fn select_pivot(graph: &Graph, top_k: usize) -> Result<(u32, u32), ClusterError> {
    if graph.node_count() < 2 {
        return Err(ClusterError::DegenerateGraph {
            node_count: graph.node_count(),
        });
    }

    let mut ranked: Vec<u32> = graph.nodes().collect();
    ranked.sort_by_key(|&node| (std::cmp::Reverse(graph.degree(node)), node));
    ranked.truncate(top_k.max(2));

    // One BFS per candidate covers every pair
    let distance_maps: BTreeMap<u32, BTreeMap<u32, usize>> = ranked
        .iter()
        .map(|&node| (node, bfs_distances(graph, node)))
        .collect();

    let mut best: Option<(usize, (u32, u32))> = None;
    for (&a, &b) in ranked.iter().tuple_combinations() {
        let Some(&dist) = distance_maps[&a].get(&b) else {
            // Unreachable pair; only possible on a disconnected graph,
            // which the driver never passes here
            continue;
        };
        let pair = if a < b { (a, b) } else { (b, a) };
        let better = match best {
            None => true,
            Some((best_dist, best_pair)) => {
                dist > best_dist || (dist == best_dist && pair < best_pair)
            }
        };
        if better {
            best = Some((dist, pair));
        }
    }

    best.map(|(_, pair)| pair).ok_or_else(|| {
        ClusterError::PreconditionViolation(
            "no mutually reachable pivot pair; graph is disconnected".to_string(),
        )
    })
}

/// Unweighted shortest-path distances from `start` to every reachable
/// node, via BFS in ascending neighbor order
fn bfs_distances(graph: &Graph, start: u32) -> BTreeMap<u32, usize> {
    let mut distances = BTreeMap::new();
    distances.insert(start, 0);

    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let next = distances[&node] + 1;
        for neighbor in graph.neighbors(node) {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
