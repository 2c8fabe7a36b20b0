//! Socigraph CLI - run the algorithm suite against a graph built from flags.
//!
//! The graph lives only for the duration of one invocation. Nodes and edges
//! come from `--node`/`--edge` specs (or `--demo`), then the chosen command
//! runs against it and prints a table or JSON.

mod commands;
mod input;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use socigraph_adapters::plugins::algorithms::Heuristic;
use socigraph_common::types::NodeId;

use crate::commands::traverse::TraversalKind;
use crate::input::GraphArgs;

/// Social graph algorithm runner.
///
/// Builds an in-memory social graph from command-line specs and runs
/// traversals, shortest paths, components, centrality, and coloring on it.
#[derive(Parser)]
#[command(name = "socigraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    graph: GraphArgs,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress info messages and output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Display graph statistics (counts, density, degrees, weights)
    Info,

    /// Show the adjacency list, or the 0/1 matrix
    Adjacency {
        /// Print the adjacency matrix instead of the list
        #[arg(long)]
        matrix: bool,
    },

    /// Show weight coefficients and every edge weight
    Weights,

    /// Breadth-first traversal
    Bfs {
        /// Start node id
        start: NodeId,

        /// Group the visit order by hop count
        #[arg(long)]
        layers: bool,
    },

    /// Depth-first traversal
    Dfs {
        /// Start node id
        start: NodeId,
    },

    /// Dijkstra shortest paths from a source
    Dijkstra {
        /// Source node id
        start: NodeId,

        /// Goal node id; omit for distances to every reachable node
        goal: Option<NodeId>,
    },

    /// A* shortest path between two nodes
    Astar {
        /// Source node id
        start: NodeId,

        /// Goal node id
        goal: NodeId,

        /// Estimate: zero, euclidean, or scaled:FACTOR
        #[arg(long)]
        heuristic: Option<Heuristic>,
    },

    /// Connected components
    Components,

    /// Degree and closeness centrality
    Centrality {
        /// Only show the K highest-degree nodes
        #[arg(long)]
        top: Option<usize>,
    },

    /// Welsh-Powell graph coloring
    Color,

    /// List registered algorithms and their parameters
    Algorithms,

    /// Run a registered algorithm by name
    Run {
        /// Algorithm name (see `algorithms`)
        name: String,

        /// Parameters as KEY=VALUE
        params: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let db = cli
        .graph
        .load()
        .context("failed to build the graph from the command line")?;
    let (format, quiet) = (cli.format, cli.quiet);

    match cli.command {
        Commands::Info => commands::info::run(&db, format, quiet),
        Commands::Adjacency { matrix } => commands::adjacency::run(&db, matrix, format, quiet),
        Commands::Weights => commands::weights::run(&db, format, quiet),
        Commands::Bfs { start, layers } => {
            let kind = if layers {
                TraversalKind::Layers
            } else {
                TraversalKind::Bfs
            };
            commands::traverse::run(&db, kind, start, format, quiet)
        }
        Commands::Dfs { start } => {
            commands::traverse::run(&db, TraversalKind::Dfs, start, format, quiet)
        }
        Commands::Dijkstra { start, goal } => {
            commands::path::dijkstra(&db, start, goal, format, quiet)
        }
        Commands::Astar {
            start,
            goal,
            heuristic,
        } => commands::path::astar(&db, start, goal, heuristic, format, quiet),
        Commands::Components => commands::components::run(&db, format, quiet),
        Commands::Centrality { top } => commands::centrality::run(&db, top, format, quiet),
        Commands::Color => commands::color::run(&db, format, quiet),
        Commands::Algorithms => commands::algorithms::run(&db, format, quiet),
        Commands::Run { name, params } => commands::run::run(&db, &name, &params, format, quiet),
    }
}
