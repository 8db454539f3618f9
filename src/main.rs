mod cli;
mod config;
mod error;
mod matrix;
mod model;
mod routing;
mod session;

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::AppConfig;
use error::AppError;
use routing::normalize_label;
use session::Session;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.log_level);

    let source = config.graph_source(&cli)?;
    let stdout = io::stdout();

    let Some(command) = &cli.command else {
        let mut session = Session::new(io::stdin().lock(), stdout.lock(), cli.keep_case);
        return session.run(source);
    };

    let graph = model::load_graph(&source.unwrap_or_default())?;
    let mut out = stdout.lock();

    match command {
        Command::Route { from, to, by, json } => {
            let dimension = config.dimension(by.as_deref())?;
            let from = normalize_label(from, cli.keep_case);
            let to = normalize_label(to, cli.keep_case);
            routing::route(&mut out, &graph, &from, &to, dimension, *json)?;
        }
        Command::Distances { from, by, json } => {
            let dimension = config.dimension(by.as_deref())?;
            let from = normalize_label(from, cli.keep_case);
            routing::distances(&mut out, &graph, &from, dimension, *json)?;
        }
        Command::Matrix { by, json } => {
            let dimension = config.dimension(by.as_deref())?;
            matrix::travel_matrix(&mut out, &graph, dimension, *json)?;
        }
        Command::Show { json } => model::show(&mut out, &graph, *json)?,
    }
    out.flush()?;
    Ok(())
}

/// Logs go to stderr, `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
