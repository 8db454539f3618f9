use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{Error, PathResult, PathWeight, VertexId, WeightDimension, WeightedGraph};

impl WeightedGraph {
    /// Dijkstra's algorithm from `start` to `end` with predecessor tracking.
    ///
    /// The search stops as soon as `end` is settled. Returns `None` when no
    /// route exists, including when either label is not in the graph.
    pub fn shortest_path(
        &self,
        start: &str,
        end: &str,
        dimension: WeightDimension,
    ) -> Option<PathResult> {
        let (Some(source), Some(target)) = (self.vertex_id(start), self.vertex_id(end)) else {
            log::debug!("No path from {start:?} to {end:?}: vertex not in the graph");
            return None;
        };

        let (distances, predecessors) = self.traced_search(source, target, dimension);

        if source != target && predecessors[target].is_none() {
            return None;
        }
        let total_weight = distances[target]?;

        let path = self.reconstruct(&predecessors, target);
        log::trace!(
            "Shortest {dimension} from {start} to {end}: {total_weight} over {} vertices",
            path.len()
        );

        Some(PathResult {
            path,
            total_weight,
            dimension,
        })
    }

    /// [`WeightedGraph::shortest_path`] with the dimension given by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeightDimension`] before any traversal if
    /// `dimension` is not a recognized name.
    pub fn shortest_path_by_name(
        &self,
        start: &str,
        end: &str,
        dimension: &str,
    ) -> Result<Option<PathResult>, Error> {
        let dimension = dimension.parse()?;
        Ok(self.shortest_path(start, end, dimension))
    }

    fn traced_search(
        &self,
        source: VertexId,
        target: VertexId,
        dimension: WeightDimension,
    ) -> (Vec<Option<PathWeight>>, Vec<Option<VertexId>>) {
        let vertex_count = self.vertex_count();
        let mut distances: Vec<Option<PathWeight>> = vec![None; vertex_count];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
        let mut visited = FixedBitSet::with_capacity(vertex_count);
        let mut heap = BinaryHeap::new();

        // Start node has distance 0
        distances[source] = Some(0);
        heap.push(State {
            cost: 0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if visited.put(node) {
                continue;
            }

            // Non-negative weights make the target's distance final here
            if node == target {
                break;
            }

            for edge in self.neighbors(node) {
                let next = edge.target;
                if visited.contains(next) {
                    continue;
                }

                let next_cost = cost + PathWeight::from(edge.weight(dimension));
                if distances[next].is_none_or(|best| next_cost < best) {
                    distances[next] = Some(next_cost);
                    predecessors[next] = Some(node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
            }
        }

        (distances, predecessors)
    }

    /// Follow predecessors backward from `target` until a vertex without one
    fn reconstruct(&self, predecessors: &[Option<VertexId>], target: VertexId) -> Vec<String> {
        let mut node_path = vec![target];
        let mut current = target;
        while let Some(prev) = predecessors[current] {
            node_path.push(prev);
            current = prev;
        }
        node_path.reverse();

        node_path
            .into_iter()
            .filter_map(|id| self.label(id).map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, WeightDimension, WeightedGraph};

    fn line_with_shortcut() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.insert_edge("A", "B", 1, 1, 1);
        graph.insert_edge("B", "C", 1, 1, 1);
        graph.insert_edge("C", "D", 1, 1, 1);
        graph.insert_edge("A", "D", 10, 2, 10);
        graph
    }

    #[test]
    fn reconstructs_cheapest_route() {
        let graph = line_with_shortcut();
        let result = graph
            .shortest_path("A", "D", WeightDimension::Distance)
            .unwrap();
        assert_eq!(result.path, ["A", "B", "C", "D"]);
        assert_eq!(result.total_weight, 3);
        assert_eq!(result.dimension, WeightDimension::Distance);
    }

    #[test]
    fn dimension_selects_the_shortcut() {
        let graph = line_with_shortcut();
        let result = graph.shortest_path("A", "D", WeightDimension::Time).unwrap();
        assert_eq!(result.path, ["A", "D"]);
        assert_eq!(result.total_weight, 2);
    }

    #[test]
    fn start_equals_end_is_trivial() {
        let graph = line_with_shortcut();
        let result = graph.shortest_path("C", "C", WeightDimension::Cost).unwrap();
        assert_eq!(result.path, ["C"]);
        assert_eq!(result.total_weight, 0);
    }

    #[test]
    fn isolated_start_equals_end() {
        let mut graph = WeightedGraph::new();
        graph.insert_vertex("Z");
        let result = graph.shortest_path("Z", "Z", WeightDimension::Time).unwrap();
        assert_eq!(result.path, ["Z"]);
        assert_eq!(result.total_weight, 0);
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let mut graph = line_with_shortcut();
        graph.insert_edge("X", "Y", 1, 1, 1);
        assert!(graph.shortest_path("A", "Y", WeightDimension::Distance).is_none());
        assert!(graph.shortest_path("Y", "A", WeightDimension::Distance).is_none());
    }

    #[test]
    fn unknown_vertices_have_no_path() {
        let graph = line_with_shortcut();
        assert!(graph.shortest_path("A", "Q", WeightDimension::Distance).is_none());
        assert!(graph.shortest_path("Q", "A", WeightDimension::Distance).is_none());
        assert!(graph.shortest_path("Q", "Q", WeightDimension::Distance).is_none());
    }

    #[test]
    fn invalid_dimension_name_fails_fast() {
        let graph = line_with_shortcut();
        let result = graph.shortest_path_by_name("A", "D", "speed");
        assert!(matches!(result, Err(Error::InvalidWeightDimension(ref token)) if token == "speed"));

        let again = graph.shortest_path_by_name("A", "D", "distance").unwrap();
        assert_eq!(again.unwrap().total_weight, 3);
    }

    #[test]
    fn reverse_query_has_same_weight() {
        let graph = line_with_shortcut();
        for dimension in WeightDimension::ALL {
            let forward = graph.shortest_path("A", "C", dimension).unwrap();
            let backward = graph.shortest_path("C", "A", dimension).unwrap();
            assert_eq!(forward.total_weight, backward.total_weight);
        }
    }
}
