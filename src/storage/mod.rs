//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use serde_json::{json, to_string_pretty, Value};

use crate::cluster::metrics::cluster_density;
use crate::cluster::ClusteringOutcome;
use crate::graph::Graph;

/// Save a full decomposition run to the specified directory:
/// a `summary.json` plus one JSON document per final cluster
pub fn save_results(outcome: &ClusteringOutcome, graph: &Graph, output_dir: &str) -> Result<()> {
    log::info!(
        "Saving {} clusters to {}",
        outcome.clusters.len(),
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    save_summary(outcome, graph, output_dir)?;
    save_clusters(outcome, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Build the summary document for a run
pub fn build_summary(outcome: &ClusteringOutcome, graph: &Graph) -> Value {
    let cluster_sizes: Vec<usize> = outcome.clusters.iter().map(Graph::node_count).collect();
    let densities: Vec<f32> = outcome.clusters.par_iter().map(cluster_density).collect();

    let cluster_count = outcome.clusters.len();
    let avg_divisor = if cluster_count == 0 {
        1.0
    } else {
        cluster_count as f64
    };

    json!({
        "graph_stats": {
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "avg_degree": 2.0 * graph.edge_count() as f64
                / graph.node_count().max(1) as f64,
        },
        "cluster_stats": {
            "cluster_count": cluster_count,
            "total_clustered_nodes": cluster_sizes.iter().sum::<usize>(),
            "largest_cluster_size": cluster_sizes.iter().max().copied().unwrap_or(0),
            "smallest_cluster_size": cluster_sizes.iter().min().copied().unwrap_or(0),
            "avg_cluster_size": cluster_sizes.iter().sum::<usize>() as f64 / avg_divisor,
            "avg_density": densities.iter().map(|&d| d as f64).sum::<f64>() / avg_divisor,
        },
        "depth_stats": outcome.depth_stats,
        "splits": outcome.splits,
    })
}

/// Save summary information
fn save_summary(outcome: &ClusteringOutcome, graph: &Graph, output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&build_summary(outcome, graph))?.as_bytes())?;

    Ok(())
}

/// Save individual cluster information
fn save_clusters(outcome: &ClusteringOutcome, output_dir: &str) -> Result<()> {
    log::info!("Saving individual cluster information");

    let clusters_dir = Path::new(output_dir).join("clusters");
    fs::create_dir_all(&clusters_dir)?;

    for (id, cluster) in outcome.clusters.iter().enumerate() {
        let path = clusters_dir.join(format!("cluster_{}.json", id));
        let mut file = File::create(path)?;

        let cluster_json = json!({
            "id": id,
            "size": cluster.node_count(),
            "density": cluster_density(cluster),
            "members": cluster.nodes().collect::<Vec<_>>(),
        });

        file.write_all(to_string_pretty(&cluster_json)?.as_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::driver::decompose;
    use crate::config::Config;

    #[test]
    fn summary_reflects_the_run() {
        let graph =
            Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)]);
        let outcome = decompose(graph.clone(), &Config::default()).unwrap();
        let summary = build_summary(&outcome, &graph);

        assert_eq!(summary["graph_stats"]["node_count"], 6);
        assert_eq!(summary["graph_stats"]["edge_count"], 7);
        assert_eq!(summary["cluster_stats"]["cluster_count"], 2);
        assert_eq!(summary["cluster_stats"]["total_clustered_nodes"], 6);
        assert_eq!(summary["depth_stats"]["0"], json!([6]));
        assert_eq!(summary["depth_stats"]["1"], json!([3, 3]));
        assert_eq!(summary["splits"][0]["cut_value"], 1);
    }

    #[test]
    fn empty_run_summarizes_without_dividing_by_zero() {
        let summary = build_summary(&ClusteringOutcome::default(), &Graph::new());
        assert_eq!(summary["cluster_stats"]["cluster_count"], 0);
        assert_eq!(summary["cluster_stats"]["avg_cluster_size"], 0.0);
    }
}
