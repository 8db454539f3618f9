//! Weighted undirected city graphs and Dijkstra shortest-path queries
//! over one of three edge weight dimensions (distance, time, cost).

pub mod error;
pub mod export;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{
    GraphSource, SampleGraph, create_graph, read_edge_list, read_edge_list_from,
};
pub use model::{AdjacencyEntry, Edge, WeightDimension, WeightedGraph};
pub use routing::{DistanceMatrix, PathResult, distance_matrix};

/// Dense vertex index, assigned in insertion order
pub type VertexId = usize;
/// Weight of a single edge along one dimension
pub type Weight = u32;
/// Accumulated weight of a path
pub type PathWeight = u64;
