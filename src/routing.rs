use std::io::Write;

use citymap_core::prelude::*;
use serde::Serialize;

use crate::error::AppError;

#[derive(Serialize)]
struct RouteReport<'a> {
    from: &'a str,
    to: &'a str,
    dimension: WeightDimension,
    result: Option<&'a PathResult>,
}

#[derive(Serialize)]
struct DistanceEntry<'a> {
    vertex: &'a str,
    weight: Option<PathWeight>,
}

/// Vertex names typed by a user are upper-cased unless told otherwise
pub fn normalize_label(name: &str, keep_case: bool) -> String {
    let name = name.trim();
    if keep_case {
        name.to_string()
    } else {
        name.to_uppercase()
    }
}

/// Unknown labels are answered as "no path"; say so in the log
pub(crate) fn warn_if_unknown(graph: &WeightedGraph, label: &str) {
    if !graph.contains_vertex(label) {
        tracing::warn!(vertex = label, "Vertex is not in the graph, treating it as unreachable");
    }
}

/// Human readable outcome of a single route query
pub fn write_route<W: Write>(
    out: &mut W,
    dimension: WeightDimension,
    start: &str,
    end: &str,
    result: Option<&PathResult>,
) -> std::io::Result<()> {
    match result {
        Some(result) => {
            writeln!(
                out,
                "Shortest {dimension} from {start} to {end}: {}",
                result.total_weight
            )?;
            writeln!(out, "Path: {result}")
        }
        None => writeln!(out, "No path found from {start} to {end}."),
    }
}

pub fn route<W: Write>(
    out: &mut W,
    graph: &WeightedGraph,
    start: &str,
    end: &str,
    dimension: WeightDimension,
    json: bool,
) -> Result<(), AppError> {
    warn_if_unknown(graph, start);
    warn_if_unknown(graph, end);

    let result = graph.shortest_path(start, end, dimension);
    if json {
        let report = RouteReport {
            from: start,
            to: end,
            dimension,
            result: result.as_ref(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_route(out, dimension, start, end, result.as_ref())?;
    }
    Ok(())
}

/// Weights from `start` to every vertex, in vertex order
pub fn distances<W: Write>(
    out: &mut W,
    graph: &WeightedGraph,
    start: &str,
    dimension: WeightDimension,
    json: bool,
) -> Result<(), AppError> {
    warn_if_unknown(graph, start);

    let distances = graph.all_distances(start, dimension);
    let entries: Vec<DistanceEntry<'_>> = graph
        .labels()
        .map(|vertex| DistanceEntry {
            vertex,
            weight: distances[vertex],
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Shortest {dimension} from {start}:")?;
    for entry in entries {
        match entry.weight {
            Some(weight) => writeln!(out, "  {}: {weight}", entry.vertex)?,
            None => writeln!(out, "  {}: unreachable", entry.vertex)?,
        }
    }
    Ok(())
}
