//! Minimum s-t cut via Dinic's blocking-flow max-flow algorithm

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::error::ClusterError;
use crate::graph::Graph;

/// Outcome of a minimum s-t cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutResult {
    /// Total capacity of the edges crossing the cut; equals the
    /// maximum flow value by max-flow min-cut duality
    pub cut_value: u64,

    /// Induced subgraph over the nodes still reachable from the
    /// source in the residual graph after saturation
    pub source_side: Graph,

    /// Induced subgraph over the complement node set (contains the sink)
    pub sink_side: Graph,
}

/// Compute a minimum-capacity edge cut separating `source` from `sink`.
///
/// Every undirected edge offers its full capacity in both directions.
/// The flow network is built in ascending node order and traversed in
/// insertion order, so the returned partition is reproducible for
/// identical inputs.
///
/// `source == sink` or an endpoint absent from the graph is a
/// precondition violation: the driver only calls this on connected
/// graphs with a pivot pair it selected itself.
pub fn min_cut(graph: &Graph, source: u32, sink: u32) -> Result<CutResult, ClusterError> {
    if source == sink {
        return Err(ClusterError::PreconditionViolation(format!(
            "min cut requires distinct endpoints, got source == sink == {source}"
        )));
    }
    for endpoint in [source, sink] {
        if !graph.contains_node(endpoint) {
            return Err(ClusterError::PreconditionViolation(format!(
                "min cut endpoint {endpoint} is not a node of the graph"
            )));
        }
    }

    let node_ids: Vec<u32> = graph.nodes().collect();
    let index: HashMap<u32, usize> = node_ids
        .iter()
        .enumerate()
        .map(|(i, &node)| (node, i))
        .collect();

    let mut network = FlowNetwork::new(node_ids.len());
    for (u, v, cap) in graph.edges() {
        if u != v {
            network.add_undirected_edge(index[&u], index[&v], cap);
        }
    }

    let cut_value = network.max_flow(index[&source], index[&sink]);

    let reachable = network.residual_reachable(index[&source]);
    let source_nodes: BTreeSet<u32> = node_ids
        .iter()
        .enumerate()
        .filter(|&(i, _)| reachable[i])
        .map(|(_, &node)| node)
        .collect();
    let sink_nodes: BTreeSet<u32> = node_ids
        .iter()
        .copied()
        .filter(|node| !source_nodes.contains(node))
        .collect();

    Ok(CutResult {
        cut_value,
        source_side: graph.induced_subgraph(&source_nodes),
        sink_side: graph.induced_subgraph(&sink_nodes),
    })
}

/// Residual flow network over dense node indices.
///
/// Arcs are stored in pairs: arc `a` and arc `a ^ 1` are each other's
/// reverse, so pushing flow on one frees capacity on the other. An
/// undirected edge becomes one such pair with the full capacity on
/// both arcs.
struct FlowNetwork {
    /// arc indices leaving each node
    adjacency: Vec<Vec<usize>>,
    /// head node of each arc
    head: Vec<usize>,
    /// remaining capacity of each arc
    capacity: Vec<u64>,
    /// BFS level of each node, rebuilt once per Dinic phase
    level: Vec<Option<u32>>,
    /// per-node cursor into adjacency, reset once per phase
    cursor: Vec<usize>,
}

impl FlowNetwork {
    fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            head: Vec::new(),
            capacity: Vec::new(),
            level: vec![None; node_count],
            cursor: vec![0; node_count],
        }
    }

    fn add_undirected_edge(&mut self, u: usize, v: usize, cap: u64) {
        let arc = self.head.len();
        self.head.push(v);
        self.capacity.push(cap);
        self.head.push(u);
        self.capacity.push(cap);
        self.adjacency[u].push(arc);
        self.adjacency[v].push(arc + 1);
    }

    /// Run Dinic's algorithm to saturation and return the flow value
    fn max_flow(&mut self, source: usize, sink: usize) -> u64 {
        let mut total = 0;
        while self.build_levels(source, sink) {
            self.cursor.iter_mut().for_each(|c| *c = 0);
            loop {
                let pushed = self.augment(source, sink, u64::MAX);
                if pushed == 0 {
                    break;
                }
                total += pushed;
            }
        }
        total
    }

    /// BFS over residual arcs; true while the sink stays reachable
    fn build_levels(&mut self, source: usize, sink: usize) -> bool {
        self.level.iter_mut().for_each(|l| *l = None);
        self.level[source] = Some(0);

        let mut queue = VecDeque::from([source]);
        while let Some(node) = queue.pop_front() {
            let next = self.level[node].unwrap_or(0) + 1;
            for &arc in &self.adjacency[node] {
                let to = self.head[arc];
                if self.capacity[arc] > 0 && self.level[to].is_none() {
                    self.level[to] = Some(next);
                    queue.push_back(to);
                }
            }
        }

        self.level[sink].is_some()
    }

    /// Push one augmenting path along the level graph (DFS with
    /// per-node cursors so dead ends are never rescanned in a phase)
    fn augment(&mut self, node: usize, sink: usize, limit: u64) -> u64 {
        if node == sink {
            return limit;
        }

        while self.cursor[node] < self.adjacency[node].len() {
            let arc = self.adjacency[node][self.cursor[node]];
            let to = self.head[arc];
            let advances = match (self.level[node], self.level[to]) {
                (Some(here), Some(there)) => there == here + 1,
                _ => false,
            };
            if advances && self.capacity[arc] > 0 {
                let pushed = self.augment(to, sink, limit.min(self.capacity[arc]));
                if pushed > 0 {
                    self.capacity[arc] -= pushed;
                    self.capacity[arc ^ 1] += pushed;
                    return pushed;
                }
            }
            self.cursor[node] += 1;
        }

        0
    }

    /// Nodes still reachable from `start` through positive residual
    /// capacity; this is the source side of the minimum cut
    fn residual_reachable(&self, start: usize) -> Vec<bool> {
        let mut reachable = vec![false; self.adjacency.len()];
        reachable[start] = true;

        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for &arc in &self.adjacency[node] {
                let to = self.head[arc];
                if self.capacity[arc] > 0 && !reachable[to] {
                    reachable[to] = true;
                    stack.push(to);
                }
            }
        }

        reachable
    }
}
