use rayon::prelude::*;
use serde::Serialize;

use crate::{PathWeight, WeightDimension, WeightedGraph};

/// All-pairs shortest weights, rows and columns in vertex insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    pub labels: Vec<String>,
    pub dimension: WeightDimension,
    /// `rows[i][j]` is the weight from `labels[i]` to `labels[j]`
    pub rows: Vec<Vec<Option<PathWeight>>>,
}

impl DistanceMatrix {
    pub fn get(&self, from: &str, to: &str) -> Option<PathWeight> {
        let row = self.labels.iter().position(|label| label == from)?;
        let column = self.labels.iter().position(|label| label == to)?;
        self.rows[row][column]
    }
}

/// Runs one single-source search per vertex in parallel.
pub fn distance_matrix(graph: &WeightedGraph, dimension: WeightDimension) -> DistanceMatrix {
    log::info!(
        "Calculating {dimension} matrix for {} vertices",
        graph.vertex_count()
    );

    let rows = (0..graph.vertex_count())
        .into_par_iter()
        .map(|source| graph.settle_from(source, dimension))
        .collect();

    DistanceMatrix {
        labels: graph.labels().map(str::to_string).collect(),
        dimension,
        rows,
    }
}
