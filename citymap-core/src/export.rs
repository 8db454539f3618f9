//! Conversion into petgraph for use with its algorithms

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{Weight, WeightDimension, WeightedGraph};

impl WeightedGraph {
    /// Undirected petgraph with one edge per logical edge, weighted by
    /// `dimension`. Node indices match vertex ids.
    pub fn to_petgraph(&self, dimension: WeightDimension) -> UnGraph<String, Weight> {
        let mut pg_graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = self
            .labels()
            .map(|label| pg_graph.add_node(label.to_string()))
            .collect();

        // Each logical edge is stored under both endpoints. Keep the record
        // under the lower id; self-loops are stored twice under one vertex,
        // so only every second one is kept.
        for from in 0..self.vertex_count() {
            let mut loops = 0usize;
            for edge in self.neighbors(from) {
                let keep = match edge.target.cmp(&from) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Less => false,
                    std::cmp::Ordering::Equal => {
                        loops += 1;
                        loops % 2 == 1
                    }
                };
                if keep {
                    pg_graph.add_edge(nodes[from], nodes[edge.target], edge.weight(dimension));
                }
            }
        }
        pg_graph
    }
}
