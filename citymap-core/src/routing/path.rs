use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{PathWeight, WeightDimension};

/// Route found by [`crate::WeightedGraph::shortest_path`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Vertex labels from start to end, both inclusive
    pub path: Vec<String>,
    /// Sum of the selected weight along `path`
    pub total_weight: PathWeight,
    pub dimension: WeightDimension,
}

impl PathResult {
    pub fn start(&self) -> &str {
        &self.path[0]
    }

    pub fn end(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.iter().join(" -> "))
    }
}
