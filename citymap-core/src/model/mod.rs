//! Data model for the city graph
//!
//! Vertices are string labels mapped to dense indices, every undirected
//! edge is stored as two mirrored adjacency records.

pub mod dimension;
pub mod edge;
pub mod graph;

pub use dimension::WeightDimension;
pub use edge::Edge;
pub use graph::{AdjacencyEntry, WeightedGraph};
