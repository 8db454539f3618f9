use std::str::FromStr;

use crate::{Error, VertexId, Weight, WeightDimension};

/// Directed adjacency record, one half of an undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Vertex this record points to
    pub target: VertexId,
    pub distance: Weight,
    pub time: Weight,
    pub cost: Weight,
}

impl Edge {
    pub fn new(target: VertexId, distance: Weight, time: Weight, cost: Weight) -> Self {
        Edge {
            target,
            distance,
            time,
            cost,
        }
    }

    pub fn weight(&self, dimension: WeightDimension) -> Weight {
        match dimension {
            WeightDimension::Distance => self.distance,
            WeightDimension::Time => self.time,
            WeightDimension::Cost => self.cost,
        }
    }

    /// Weight selected by a textual dimension name
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeightDimension`] if `name` is not
    /// `distance`, `time` or `cost` (case-insensitive).
    pub fn weight_of(&self, name: &str) -> Result<Weight, Error> {
        WeightDimension::from_str(name).map(|dimension| self.weight(dimension))
    }

    /// Same weights pointing at another vertex
    pub(crate) fn mirrored(&self, target: VertexId) -> Self {
        Edge { target, ..*self }
    }
}
