//! Configuration management for the min-cut clusterer

/// Tunables for a decomposition run
#[derive(Debug, Clone)]
pub struct Config {
    /// Graphs at or below this node count become final clusters
    pub size_threshold: usize,

    /// How many top-degree nodes the pivot selector considers.
    /// The default of 4 is a heuristic, not a validated optimum;
    /// dense or star-shaped graphs may want a different value.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size_threshold: 5,
            top_k: 4,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(size_threshold: usize, top_k: usize) -> Self {
        Self {
            size_threshold,
            top_k,
        }
    }
}
