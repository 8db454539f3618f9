// Shortest-path queries over a WeightedGraph

pub mod dijkstra;
pub mod matrix;
pub mod path;

pub use matrix::{DistanceMatrix, distance_matrix};
pub use path::PathResult;
