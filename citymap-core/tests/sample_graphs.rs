use citymap_core::prelude::*;

/// Minimum weight over every simple path from `start` to `end`, found by
/// exhaustive depth-first enumeration. Only usable on tiny graphs.
fn brute_force_minimum(
    graph: &WeightedGraph,
    start: &str,
    end: &str,
    dimension: WeightDimension,
) -> Option<PathWeight> {
    fn walk(
        graph: &WeightedGraph,
        current: &str,
        end: &str,
        dimension: WeightDimension,
        visited: &mut Vec<String>,
        so_far: PathWeight,
        best: &mut Option<PathWeight>,
    ) {
        if current == end {
            *best = Some(best.map_or(so_far, |b| b.min(so_far)));
            return;
        }
        for edge in graph.edges(current).unwrap() {
            let next = graph.label(edge.target).unwrap().to_string();
            if visited.contains(&next) {
                continue;
            }
            visited.push(next.clone());
            let weight = PathWeight::from(edge.weight(dimension));
            walk(graph, &next, end, dimension, visited, so_far + weight, best);
            visited.pop();
        }
    }

    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        return None;
    }
    let mut best = None;
    let mut visited = vec![start.to_string()];
    walk(graph, start, end, dimension, &mut visited, 0, &mut best);
    best
}

/// Sum of `dimension` along consecutive vertices, using the cheapest
/// parallel edge between each pair
fn path_weight(graph: &WeightedGraph, path: &[String], dimension: WeightDimension) -> PathWeight {
    path.windows(2)
        .map(|pair| {
            let to = graph.vertex_id(&pair[1]).unwrap();
            graph
                .edges(&pair[0])
                .unwrap()
                .iter()
                .filter(|edge| edge.target == to)
                .map(|edge| PathWeight::from(edge.weight(dimension)))
                .min()
                .expect("consecutive path vertices must be adjacent")
        })
        .sum()
}

#[test]
fn first_sample_known_totals() {
    let graph = SampleGraph::First.build();

    let by_distance = graph
        .shortest_path("A", "F", WeightDimension::Distance)
        .unwrap();
    assert_eq!(by_distance.total_weight, 11);
    assert_eq!(by_distance.start(), "A");
    assert_eq!(by_distance.end(), "F");
    assert_eq!(path_weight(&graph, &by_distance.path, WeightDimension::Distance), 11);

    let by_time = graph.shortest_path("A", "F", WeightDimension::Time).unwrap();
    assert_eq!(by_time.total_weight, 23);
    assert_eq!(path_weight(&graph, &by_time.path, WeightDimension::Time), 23);

    let by_cost = graph.shortest_path("A", "F", WeightDimension::Cost).unwrap();
    assert_eq!(by_cost.total_weight, 9);
}

#[test]
fn every_pair_matches_exhaustive_search() {
    for sample in SampleGraph::ALL {
        let graph = sample.build();
        let labels: Vec<String> = graph.labels().map(str::to_string).collect();

        for dimension in WeightDimension::ALL {
            for start in &labels {
                let distances = graph.all_distances(start, dimension);
                assert_eq!(distances[start.as_str()], Some(0));

                for end in &labels {
                    let expected = brute_force_minimum(&graph, start, end, dimension);
                    assert_eq!(distances[end.as_str()], expected, "{start}->{end} by {dimension}");

                    let result = graph.shortest_path(start, end, dimension).unwrap();
                    assert_eq!(Some(result.total_weight), expected);
                    assert_eq!(path_weight(&graph, &result.path, dimension), result.total_weight);
                    assert_eq!(result.start(), start);
                    assert_eq!(result.end(), end);
                }
            }
        }
    }
}

#[test]
fn reversed_queries_have_equal_weight() {
    for sample in SampleGraph::ALL {
        let graph = sample.build();
        let labels: Vec<&str> = graph.labels().collect();
        for dimension in WeightDimension::ALL {
            for a in &labels {
                for b in &labels {
                    let forward = graph.shortest_path(a, b, dimension).unwrap();
                    let backward = graph.shortest_path(b, a, dimension).unwrap();
                    assert_eq!(forward.total_weight, backward.total_weight);
                }
            }
        }
    }
}

#[test]
fn self_query_is_single_vertex() {
    let graph = SampleGraph::Second.build();
    for label in graph.labels() {
        let result = graph.shortest_path(label, label, WeightDimension::Cost).unwrap();
        assert_eq!(result.path, [label]);
        assert_eq!(result.total_weight, 0);
    }
}

#[test]
fn disconnected_component_reports_no_path() {
    let mut graph = SampleGraph::First.build();
    graph.insert_edge("M", "N", 1, 1, 1);

    assert!(graph.shortest_path("A", "M", WeightDimension::Distance).is_none());
    let distances = graph.all_distances("A", WeightDimension::Distance);
    assert_eq!(distances["M"], None);
    assert_eq!(distances["N"], None);
    assert_eq!(distances["F"], Some(11));
}

#[test]
fn invalid_dimension_leaves_graph_usable() {
    let graph = SampleGraph::First.build();

    assert!(matches!(
        graph.all_distances_by_name("A", "speed"),
        Err(Error::InvalidWeightDimension(_))
    ));
    assert!(matches!(
        graph.shortest_path_by_name("A", "F", "speed"),
        Err(Error::InvalidWeightDimension(_))
    ));

    let result = graph.shortest_path_by_name("A", "F", "Distance").unwrap();
    assert_eq!(result.unwrap().total_weight, 11);
}

#[test]
fn duplicate_edge_insertion_is_a_multigraph() {
    let mut graph = SampleGraph::First.build();
    graph.insert_edge("A", "F", 50, 50, 50);
    graph.insert_edge("A", "F", 1, 100, 100);

    assert_eq!(graph.edge_count(), 11);
    let result = graph.shortest_path("A", "F", WeightDimension::Distance).unwrap();
    assert_eq!(result.path, ["A", "F"]);
    assert_eq!(result.total_weight, 1);

    let by_time = graph.shortest_path("F", "A", WeightDimension::Time).unwrap();
    assert_eq!(by_time.total_weight, 23);
}
