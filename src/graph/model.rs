//! Adjacency-based undirected graph with per-edge capacities

use std::collections::{BTreeMap, BTreeSet};

/// Undirected graph over integer node ids with a positive integer
/// capacity per edge (uniformly 1 for unweighted inputs).
///
/// Adjacency is kept in ordered maps so that node and neighbor
/// iteration order is stable, which the clustering pipeline relies on
/// for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// adjacency[u][v] = capacity of the undirected edge (u, v).
    /// The entry is mirrored: adjacency[v][u] holds the same capacity.
    adjacency: BTreeMap<u32, BTreeMap<u32, u64>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, giving every edge capacity 1.
    /// Endpoints are auto-created; duplicate edges are idempotent.
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Ensure a node exists (as a singleton if it has no edges)
    pub fn add_node(&mut self, node: u32) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected unit-capacity edge, auto-creating endpoints.
    /// Adding the same edge again leaves the graph unchanged.
    pub fn add_edge(&mut self, u: u32, v: u32) {
        self.add_edge_with_capacity(u, v, 1);
    }

    /// Add an undirected edge with an explicit capacity. The first
    /// insertion wins; re-adding an existing edge is a no-op.
    pub fn add_edge_with_capacity(&mut self, u: u32, v: u32, capacity: u64) {
        self.adjacency
            .entry(u)
            .or_default()
            .entry(v)
            .or_insert(capacity);
        self.adjacency
            .entry(v)
            .or_default()
            .entry(u)
            .or_insert(capacity);
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no nodes at all
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether the node is present
    pub fn contains_node(&self, node: u32) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate the neighbors of a node in ascending order.
    /// An absent node yields an empty iterator.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|adj| adj.keys().copied())
    }

    /// Number of edges incident to a node (0 for absent nodes)
    pub fn degree(&self, node: u32) -> usize {
        self.adjacency.get(&node).map_or(0, |adj| adj.len())
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterate undirected edges as (u, v, capacity) with u <= v,
    /// in ascending (u, v) order
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, u64)> + '_ {
        self.adjacency.iter().flat_map(|(&u, adj)| {
            adj.iter()
                .filter(move |&(&v, _)| u <= v)
                .map(move |(&v, &cap)| (u, v, cap))
        })
    }

    /// Capacity of the edge (u, v), if present
    pub fn capacity(&self, u: u32, v: u32) -> Option<u64> {
        self.adjacency.get(&u).and_then(|adj| adj.get(&v)).copied()
    }

    /// Extract the subgraph induced by a node subset: the listed nodes
    /// (intersected with the graph's node set) plus every edge whose
    /// both endpoints are in the subset, capacities copied unchanged.
    ///
    /// The result is an independent copy; mutating it never affects
    /// this graph. Cost is proportional to the degrees of the kept
    /// nodes, not the full parent graph.
    pub fn induced_subgraph(&self, nodes: &BTreeSet<u32>) -> Graph {
        let mut sub = Graph::new();
        for &node in nodes {
            let Some(adj) = self.adjacency.get(&node) else {
                continue;
            };
            sub.add_node(node);
            for (&neighbor, &cap) in adj {
                if neighbor >= node && nodes.contains(&neighbor) {
                    sub.add_edge_with_capacity(node, neighbor, cap);
                }
            }
        }
        sub
    }
}
