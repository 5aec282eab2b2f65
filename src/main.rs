use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use densegraph::format::{adjacency_list, edge_list};
use densegraph::graph::{Degree, Graph};

#[derive(Parser)]
#[command(name = "densegraph")]
#[command(version)]
#[command(about = "Query a graph stored as a flat text file", long_about = None)]
struct Cli {
    /// Graph file to load
    #[arg(short, long, default_value = "graph.txt")]
    file: PathBuf,

    /// Format of the graph file
    #[arg(long, value_enum, default_value_t = FileFormat::EdgeList)]
    format: FileFormat,

    /// Log traversal and loading details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FileFormat {
    EdgeList,
    AdjacencyList,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency matrix
    Matrix,
    /// Find articulation points with a depth-first search
    Points,
    /// Check whether two nodes are adjacent
    Adjacent { from: String, to: String },
    /// Compute the degree of a node
    Degree { node: String },
    /// List the neighbors of a node
    Neighbors { node: String },
    /// List every edge of the graph
    Edges,
    /// Write the graph to a file in the adjacency-list format
    Convert { output: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let graph = load_graph(&cli)?;
    run_command(&cli.command, &graph)
}

fn load_graph(cli: &Cli) -> Result<Graph> {
    let graph = match cli.format {
        FileFormat::EdgeList => edge_list::read_file(&cli.file),
        FileFormat::AdjacencyList => adjacency_list::read_file(&cli.file),
    };
    graph.with_context(|| format!("failed to load graph from {}", cli.file.display()))
}

fn run_command(command: &Commands, graph: &Graph) -> Result<()> {
    match command {
        Commands::Matrix => {
            print!("{graph}");
        }
        Commands::Points => {
            let points = graph.articulation_points();
            if points.is_empty() {
                println!("no articulation points");
            }
            for name in points {
                println!("{name} is an articulation point");
            }
        }
        Commands::Adjacent { from, to } => {
            if graph.is_adjacent(from, to)? {
                println!("{from} and {to} are adjacent");
            } else {
                println!("{from} and {to} are not adjacent");
            }
        }
        Commands::Degree { node } => match graph.degree(node)? {
            Degree::Directed {
                out_degree,
                in_degree,
            } => {
                println!("out-degree of {node}: {out_degree}");
                println!("in-degree of {node}: {in_degree}");
            }
            Degree::Undirected(degree) => {
                println!("degree of {node}: {degree}");
            }
        },
        Commands::Neighbors { node } => {
            let mut neighbors: Vec<_> = graph.neighbors(node)?.into_iter().collect();
            neighbors.sort_unstable();
            println!("neighbors of {node}: {}", neighbors.join(", "));
        }
        Commands::Edges => {
            let arrow = if graph.is_directed() { "->" } else { "--" };
            for (from, to) in graph.edges() {
                println!("{from} {arrow} {to}");
            }
        }
        Commands::Convert { output } => {
            adjacency_list::write_file(graph, output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("wrote {}", output.display());
        }
    }
    Ok(())
}
