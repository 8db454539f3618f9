use log::info;

use super::config::GraphSource;
use super::edge_list::read_edge_list;
use crate::{Error, WeightedGraph};

/// Creates a graph from the provided source
///
/// # Errors
///
/// Returns an error if the edge list is missing, unreadable or malformed
pub fn create_graph(source: &GraphSource) -> Result<WeightedGraph, Error> {
    validate_source(source)?;

    let graph = match source {
        GraphSource::Sample(sample) => {
            info!("Loading sample graph {}", sample.choice());
            sample.build()
        }
        GraphSource::EdgeList(path) => {
            info!("Reading edge list: {}", path.display());
            read_edge_list(path)?
        }
    };

    if graph.is_empty() {
        log::warn!("Graph has no vertices - every query will report no path");
    }
    info!(
        "Graph ready with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn validate_source(source: &GraphSource) -> Result<(), Error> {
    if let GraphSource::EdgeList(path) = source {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Edge list not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}
