use anyhow::Result;
use clap::Parser;

mod cluster;
mod config;
mod cut;
mod data;
mod error;
mod graph;
mod storage;

use config::Config;

#[derive(Parser, Debug)]
#[clap(
    name = "graph-cut-clusterer",
    about = "Recursive min-cut decomposition of undirected graphs into tight clusters"
)]
struct Cli {
    /// Path to input edge-list file
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "cluster_results")]
    output_dir: String,

    /// Graphs at or below this node count become final clusters
    #[clap(long, default_value = "5")]
    size_threshold: usize,

    /// Number of top-degree nodes considered for pivot selection
    #[clap(long, default_value = "4")]
    top_k: usize,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting min-cut decomposition");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // 1. Load the graph
    let input_graph = data::edgelist::load_edge_list(&args.input)?;

    // 2. Run the recursive decomposition
    let config = Config::new(args.size_threshold, args.top_k);
    let started = std::time::Instant::now();
    let outcome = cluster::driver::decompose(input_graph.clone(), &config)?;
    let elapsed = started.elapsed();

    log::info!(
        "Clustering finished: {} final clusters, {} cut-splits in {:.2?}",
        outcome.clusters.len(),
        outcome.splits.len(),
        elapsed
    );

    // 3. Save results
    storage::save_results(&outcome, &input_graph, &args.output_dir)?;

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
