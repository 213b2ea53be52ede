//! Recursive clustering module

pub mod driver;
pub mod metrics;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::Graph;

/// Sizes of the graphs processed at each recursion depth, in
/// processing order. A monitoring side-channel only; nothing reads it
/// to drive decisions.
pub type DepthStats = BTreeMap<usize, Vec<usize>>;

/// One min-cut split event in the decomposition tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRecord {
    /// Recursion depth of the graph that was split
    pub depth: usize,

    /// Node count of the graph before the split
    pub parent_size: usize,

    /// Node count of the source-side partition
    pub source_side_size: usize,

    /// Node count of the sink-side partition
    pub sink_side_size: usize,

    /// Capacity of the minimum cut that produced the split
    pub cut_value: u64,
}

/// Everything a full decomposition run accumulates.
///
/// Owned by the run that produced it; a failed run's partial outcome
/// is dropped with the error rather than surfaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusteringOutcome {
    /// Leaf clusters in emission order, the primary output
    pub clusters: Vec<Graph>,

    /// Every cut-split, in the order the splits happened
    pub splits: Vec<SplitRecord>,

    /// Graph sizes observed per recursion depth
    pub depth_stats: DepthStats,
}
