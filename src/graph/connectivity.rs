//! Connected component discovery

use std::collections::BTreeSet;

use crate::graph::Graph;

/// Result of a connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connectivity {
    /// Every node is reachable from every other; no components were
    /// materialized (the caller keeps working on the graph as-is)
    Connected,

    /// The graph splits into two or more components, each an induced
    /// subgraph, in discovery order
    Components(Vec<Graph>),
}

/// Determine whether a graph is connected; if not, partition it into
/// connected components.
///
/// Runs one traversal from the smallest node id and exits early with
/// [`Connectivity::Connected`] when it covers the whole graph.
/// Otherwise traversals are re-seeded from each unvisited node until
/// every node belongs to exactly one component. An empty or
/// single-node graph is trivially connected.
pub fn components(graph: &Graph) -> Connectivity {
    let Some(start) = graph.nodes().next() else {
        return Connectivity::Connected;
    };

    let first = reachable_from(graph, start);
    if first.len() == graph.node_count() {
        return Connectivity::Connected;
    }

    let mut found = vec![graph.induced_subgraph(&first)];
    let mut visited = first;
    for node in graph.nodes() {
        if visited.contains(&node) {
            continue;
        }
        let component = reachable_from(graph, node);
        visited.extend(component.iter().copied());
        found.push(graph.induced_subgraph(&component));
    }

    Connectivity::Components(found)
}

/// Collect every node reachable from `start` via an iterative
/// depth-first traversal
fn reachable_from(graph: &Graph, start: u32) -> BTreeSet<u32> {
    let mut visited = BTreeSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(node) = stack.pop() {
        for neighbor in graph.neighbors(node) {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited
}
