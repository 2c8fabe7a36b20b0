//! Benchmarks for the shortest-path, centrality, and coloring algorithms.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use socigraph_adapters::plugins::algorithms::{
    Heuristic, astar, closeness_centrality, dijkstra, welsh_powell,
};
use socigraph_common::NodeId;
use socigraph_core::{Node, SocialGraph, WeightConfig};

/// A `side x side` grid with similarity weights.
fn grid(side: u64) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            let node = Node::new(id, format!("n{id}"))
                .with_activity((id % 7) as f64 / 7.0)
                .with_interaction((id % 11) as f64)
                .with_connection_count((id % 5) as u32)
                .with_position(c as f64, r as f64);
            graph.add_node(node).unwrap();
        }
    }
    let config = WeightConfig::default();
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            if c + 1 < side {
                graph.add_edge(NodeId::new(id), NodeId::new(id + 1), &config).unwrap();
            }
            if r + 1 < side {
                graph.add_edge(NodeId::new(id), NodeId::new(id + side), &config).unwrap();
            }
        }
    }
    graph
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = grid(60);
    let source = NodeId::new(0);
    let target = NodeId::new(60 * 60 - 1);

    c.bench_function("dijkstra_grid_60", |b| {
        b.iter(|| dijkstra(black_box(&graph), source, Some(target)).unwrap());
    });
    c.bench_function("astar_zero_grid_60", |b| {
        b.iter(|| astar(black_box(&graph), source, target, Heuristic::Zero).unwrap());
    });
}

fn bench_centrality(c: &mut Criterion) {
    let graph = grid(15);
    c.bench_function("closeness_grid_15", |b| {
        b.iter(|| closeness_centrality(black_box(&graph)).unwrap());
    });
}

fn bench_coloring(c: &mut Criterion) {
    let graph = grid(60);
    c.bench_function("welsh_powell_grid_60", |b| {
        b.iter(|| welsh_powell(black_box(&graph)));
    });
}

criterion_group!(benches, bench_shortest_path, bench_centrality, bench_coloring);
criterion_main!(benches);
