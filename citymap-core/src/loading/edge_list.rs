use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Weight, WeightedGraph};

/// One row of an edge list file
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    distance: Weight,
    time: Weight,
    cost: Weight,
}

/// Reads an undirected edge list with the header
/// `source,target,distance,time,cost`.
///
/// # Errors
///
/// Fails if the file cannot be opened, a row cannot be parsed, or a row
/// has an empty vertex label.
pub fn read_edge_list(path: &Path) -> Result<WeightedGraph, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    read_edge_list_from(file)
}

/// Same as [`read_edge_list`] for any reader
///
/// # Errors
///
/// Fails if a row cannot be parsed or has an empty vertex label.
pub fn read_edge_list_from<R: Read>(reader: R) -> Result<WeightedGraph, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = WeightedGraph::new();
    for (row, record) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
        let record = record?;
        if record.source.is_empty() || record.target.is_empty() {
            return Err(Error::InvalidData(format!(
                "empty vertex label in edge list row {}",
                row + 1
            )));
        }
        graph.insert_edge(
            &record.source,
            &record.target,
            record.distance,
            record.time,
            record.cost,
        );
    }

    log::debug!(
        "Read {} vertices and {} edges from edge list",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
