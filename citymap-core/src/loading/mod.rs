//! This module is responsible for building city graphs, either from the
//! bundled sample maps or from a CSV edge list.

mod builder;
mod config;
mod edge_list;
mod samples;

pub use builder::create_graph;
pub use config::GraphSource;
pub use edge_list::{read_edge_list, read_edge_list_from};
pub use samples::SampleGraph;
