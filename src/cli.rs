use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "citymap",
    about = "Shortest routes over a small city map by distance, time or cost",
    version
)]
pub struct Cli {
    /// TOML configuration file (defaults to ./citymap.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sample graph to load (1-3)
    #[arg(long, global = true, conflicts_with = "edges")]
    pub graph: Option<u8>,

    /// CSV edge list with the header source,target,distance,time,cost
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Do not upper-case vertex names given on the command line
    #[arg(long, global = true)]
    pub keep_case: bool,

    /// Without a subcommand an interactive session is started
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shortest path between two vertices
    Route {
        from: String,
        to: String,
        /// Weight dimension: distance, time or cost
        #[arg(long)]
        by: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Shortest weight from one vertex to every other vertex
    Distances {
        from: String,
        #[arg(long)]
        by: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// All-pairs shortest weights
    Matrix {
        #[arg(long)]
        by: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the adjacency list of the graph
    Show {
        #[arg(long)]
        json: bool,
    },
}
