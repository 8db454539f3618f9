use std::io::Write;

use citymap_core::prelude::*;

use crate::error::AppError;

/// All-pairs table; unreachable pairs are shown as `-`
pub fn travel_matrix<W: Write>(
    out: &mut W,
    graph: &WeightedGraph,
    dimension: WeightDimension,
    json: bool,
) -> Result<(), AppError> {
    let matrix = distance_matrix(graph, dimension);

    if json {
        serde_json::to_writer_pretty(&mut *out, &matrix)?;
        writeln!(out)?;
        return Ok(());
    }

    let cells: Vec<Vec<String>> = matrix
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|weight| weight.map_or_else(|| "-".to_string(), |w| w.to_string()))
                .collect()
        })
        .collect();
    let width = matrix
        .labels
        .iter()
        .chain(cells.iter().flatten())
        .map(String::len)
        .max()
        .unwrap_or(1);

    writeln!(out, "Shortest {dimension} matrix:")?;
    write!(out, "{:width$}", "")?;
    for label in &matrix.labels {
        write!(out, " {label:>width$}")?;
    }
    writeln!(out)?;

    for (label, row) in matrix.labels.iter().zip(&cells) {
        write!(out, "{label:width$}")?;
        for cell in row {
            write!(out, " {cell:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
