use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use super::state::State;
use crate::{Error, PathWeight, VertexId, WeightDimension, WeightedGraph};

impl WeightedGraph {
    /// Dijkstra's algorithm from `start` to every vertex of the graph.
    ///
    /// Every vertex appears in the result; `None` marks a vertex that is
    /// unreachable from `start`. An unknown `start` leaves all vertices
    /// unreachable.
    pub fn all_distances(
        &self,
        start: &str,
        dimension: WeightDimension,
    ) -> HashMap<&str, Option<PathWeight>> {
        let distances = match self.vertex_id(start) {
            Some(source) => self.settle_from(source, dimension),
            None => {
                log::debug!("Start vertex {start:?} is not in the graph");
                vec![None; self.vertex_count()]
            }
        };

        self.labels().zip(distances).collect()
    }

    /// [`WeightedGraph::all_distances`] with the dimension given by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeightDimension`] before any traversal if
    /// `dimension` is not a recognized name.
    pub fn all_distances_by_name(
        &self,
        start: &str,
        dimension: &str,
    ) -> Result<HashMap<&str, Option<PathWeight>>, Error> {
        let dimension = dimension.parse()?;
        Ok(self.all_distances(start, dimension))
    }

    /// Distances indexed by vertex id
    pub(crate) fn settle_from(
        &self,
        source: VertexId,
        dimension: WeightDimension,
    ) -> Vec<Option<PathWeight>> {
        let vertex_count = self.vertex_count();
        let mut distances: Vec<Option<PathWeight>> = vec![None; vertex_count];
        let mut visited = FixedBitSet::with_capacity(vertex_count);
        let mut heap = BinaryHeap::new();

        // Start node has distance 0
        distances[source] = Some(0);
        heap.push(State {
            cost: 0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            // Stale entry left behind by a later relaxation
            if visited.put(node) {
                continue;
            }

            for edge in self.neighbors(node) {
                let next = edge.target;
                if visited.contains(next) {
                    continue;
                }

                let next_cost = cost + PathWeight::from(edge.weight(dimension));
                if distances[next].is_none_or(|best| next_cost < best) {
                    distances[next] = Some(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
            }
        }

        distances
    }
}
