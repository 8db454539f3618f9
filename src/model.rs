//! Graph loading and the `show` command

use std::io::Write;

use citymap_core::prelude::*;
use serde::Serialize;

use crate::error::AppError;

#[derive(Serialize)]
struct VertexListing<'a> {
    vertex: &'a str,
    edges: Vec<AdjacencyEntry<'a>>,
}

pub fn load_graph(source: &GraphSource) -> Result<WeightedGraph, AppError> {
    let graph = create_graph(source)?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Graph loaded"
    );
    Ok(graph)
}

/// Adjacency dump, one line per vertex or a JSON array
pub fn show<W: Write>(out: &mut W, graph: &WeightedGraph, json: bool) -> Result<(), AppError> {
    if json {
        let listing: Vec<VertexListing<'_>> = graph
            .adjacency()
            .map(|(vertex, edges)| VertexListing { vertex, edges })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
    } else {
        write!(out, "{graph}")?;
    }
    Ok(())
}
