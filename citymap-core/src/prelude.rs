// Re-export key components
pub use crate::Error;
pub use crate::loading::{
    GraphSource, SampleGraph, create_graph, read_edge_list, read_edge_list_from,
};
pub use crate::model::{AdjacencyEntry, Edge, WeightDimension, WeightedGraph};
pub use crate::routing::{DistanceMatrix, PathResult, distance_matrix};

// Core scalar types
pub use crate::PathWeight;
pub use crate::VertexId;
pub use crate::Weight;
