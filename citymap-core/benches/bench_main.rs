use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use citymap_core::prelude::*;

/// Square grid with deterministic weights, labels `r{row}c{col}`
fn grid_graph(side: usize) -> WeightedGraph {
    let mut graph = WeightedGraph::with_capacity(side * side);
    let label = |row: usize, col: usize| format!("r{row}c{col}");

    for row in 0..side {
        for col in 0..side {
            let weight = ((row * 31 + col * 17) % 13 + 1) as Weight;
            if col + 1 < side {
                graph.insert_edge(&label(row, col), &label(row, col + 1), weight, weight * 2, 1);
            }
            if row + 1 < side {
                graph.insert_edge(&label(row, col), &label(row + 1, col), weight + 3, weight, 2);
            }
        }
    }
    graph
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dijkstra queries");

    for side in [10, 30, 60] {
        let graph = grid_graph(side);
        let far_corner = format!("r{}c{}", side - 1, side - 1);

        group.bench_with_input(BenchmarkId::new("all_distances", side), &graph, |b, graph| {
            b.iter(|| graph.all_distances(black_box("r0c0"), WeightDimension::Distance));
        });

        group.bench_with_input(BenchmarkId::new("shortest_path", side), &graph, |b, graph| {
            b.iter(|| {
                graph.shortest_path(
                    black_box("r0c0"),
                    black_box(&far_corner),
                    WeightDimension::Time,
                )
            });
        });
    }
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let graph = grid_graph(20);
    c.bench_function("distance_matrix 20x20", |b| {
        b.iter(|| distance_matrix(black_box(&graph), WeightDimension::Cost));
    });
}

criterion_group!(benches, bench_queries, bench_matrix);
criterion_main!(benches);
