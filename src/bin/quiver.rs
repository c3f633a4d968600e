//! Command-line test-data generator built on the quiver library.
#![forbid(unsafe_code)]

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quiver::{srand, uniform_weighter, DirectedGraph, Result, UndirectedGraph};

#[derive(Parser, Debug)]
#[command(
    name = "quiver",
    version,
    about = "Random graph generator for competitive-programming test data",
    disable_help_subcommand = true
)]
struct Cli {
    /// Seed for the process-wide generator.
    #[arg(long, global = true, default_value_t = 1)]
    seed: u64,

    /// Attach uniform random integer weights from [MIN, MAX).
    #[arg(long, global = true, num_args = 2, value_names = ["MIN", "MAX"])]
    weights: Option<Vec<i64>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Path on N vertices.
    Path { nodes: usize },
    /// Cycle on N vertices.
    Cycle { nodes: usize },
    /// Uniform random tree on N vertices.
    Tree { nodes: usize },
    /// Forest with M edges on N vertices.
    Forest { nodes: usize, edges: usize },
    /// Star with vertex 0 at the center.
    Star { nodes: usize },
    /// Wheel with vertex 0 at the hub.
    Wheel { nodes: usize },
    /// Complete graph on N vertices.
    Clique {
        nodes: usize,
        #[arg(long)]
        directed: bool,
    },
    /// Uniform random graph with M edges.
    Random {
        nodes: usize,
        edges: usize,
        #[arg(long)]
        directed: bool,
        /// Add the minimum extra edges to make the result connected.
        #[arg(long)]
        connect: bool,
    },
    /// Uniform random DAG with M edges (every edge from higher to lower).
    Dag { nodes: usize, edges: usize },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    srand(cli.seed);
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let directed = matches!(
        cli.command,
        Command::Dag { .. }
            | Command::Clique { directed: true, .. }
            | Command::Random { directed: true, .. }
    );
    if directed {
        let mut graph = DirectedGraph::new(nodes_of(&cli.command));
        if let Some(bounds) = weight_bounds(cli)? {
            graph.set_weighter(uniform_weighter(bounds.0, bounds.1, cli.seed));
        }
        build_directed(&mut graph, &cli.command)?;
        Ok(graph.to_string())
    } else {
        let mut graph = UndirectedGraph::new(nodes_of(&cli.command));
        if let Some(bounds) = weight_bounds(cli)? {
            graph.set_weighter(uniform_weighter(bounds.0, bounds.1, cli.seed));
        }
        build_undirected(&mut graph, &cli.command)?;
        Ok(graph.to_string())
    }
}

fn nodes_of(command: &Command) -> usize {
    match *command {
        Command::Path { nodes }
        | Command::Cycle { nodes }
        | Command::Tree { nodes }
        | Command::Forest { nodes, .. }
        | Command::Star { nodes }
        | Command::Wheel { nodes }
        | Command::Clique { nodes, .. }
        | Command::Random { nodes, .. }
        | Command::Dag { nodes, .. } => nodes,
    }
}

fn weight_bounds(cli: &Cli) -> Result<Option<(i64, i64)>> {
    match cli.weights.as_deref() {
        None => Ok(None),
        Some([min, max]) if min < max => Ok(Some((*min, *max))),
        Some(_) => Err(quiver::GraphError::InvalidArgument(
            "weight bounds must satisfy MIN < MAX".into(),
        )),
    }
}

fn build_undirected(graph: &mut UndirectedGraph, command: &Command) -> Result<()> {
    match *command {
        Command::Path { .. } => graph.build_path(),
        Command::Cycle { .. } => graph.build_cycle(),
        Command::Tree { .. } => graph.build_tree(),
        Command::Forest { edges, .. } => graph.build_forest(edges),
        Command::Star { .. } => graph.build_star(),
        Command::Wheel { .. } => graph.build_wheel(),
        Command::Clique { .. } => graph.build_clique(),
        Command::Random { edges, connect, .. } => {
            graph.add_edges(edges)?;
            if connect {
                graph.connect()?;
            }
            Ok(())
        }
        Command::Dag { .. } => unreachable!("dag graphs are directed"),
    }
}

fn build_directed(graph: &mut DirectedGraph, command: &Command) -> Result<()> {
    match *command {
        Command::Clique { .. } => graph.build_clique(),
        Command::Random { edges, .. } => graph.add_edges(edges),
        Command::Dag { edges, .. } => graph.build_dag(edges),
        _ => unreachable!("only clique, random and dag run directed"),
    }
}
