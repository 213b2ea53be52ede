//! Error types for the clustering core

use thiserror::Error;

/// Errors surfaced by the clustering core.
///
/// None of these are retryable: every operation is a pure function of
/// its input graph, so a failed call fails identically on retry.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Malformed edge entry in an input edge list
    #[error("invalid edge entry on line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    /// A solver was called with arguments that the driver must never
    /// produce (e.g. source == sink, or a node absent from the graph)
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),

    /// A pivot was requested on a graph with fewer than two nodes
    #[error("degenerate graph: {node_count} node(s) is too few for pivot selection")]
    DegenerateGraph { node_count: usize },
}
