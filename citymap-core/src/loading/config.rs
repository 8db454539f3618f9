use std::path::PathBuf;

use crate::SampleGraph;

/// Where a graph comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// One of the bundled demo maps
    Sample(SampleGraph),
    /// CSV edge list on disk
    EdgeList(PathBuf),
}

impl Default for GraphSource {
    fn default() -> Self {
        GraphSource::Sample(SampleGraph::default())
    }
}
