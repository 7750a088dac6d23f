use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relgraph::prelude::*;

fn random_graph(num_vertices: usize, num_edges: usize, seed: u64) -> Graph<(), ()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let vertices: Vec<_> = (0..num_vertices).map(|_| graph.add_vertex(())).collect();
    for _ in 0..num_edges {
        let s = rng.random_range(0..num_vertices);
        let t = rng.random_range(0..num_vertices);
        graph.add_edge(vertices[s], vertices[t], ());
    }
    graph
}

fn random_dag(num_vertices: usize, num_edges: usize, seed: u64) -> Graph<(), ()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let vertices: Vec<_> = (0..num_vertices).map(|_| graph.add_vertex(())).collect();
    for _ in 0..num_edges {
        let s = rng.random_range(0..num_vertices - 1);
        let t = rng.random_range(s + 1..num_vertices);
        graph.add_edge(vertices[s], vertices[t], ());
    }
    graph
}

pub fn benchmark(c: &mut Criterion) {
    let graph = random_graph(10_000, 50_000, 0);
    let dag = random_dag(10_000, 50_000, 1);
    let root = VertexId::new(0);

    c.bench_function("each_dfs", |b| {
        b.iter(|| {
            let mut count = 0usize;
            each_dfs(
                Direct::new(&graph),
                black_box(root),
                EventMask::ALL,
                |_, _| count += 1,
                no_logging![],
            );
            count
        })
    });

    c.bench_function("each_bfs", |b| {
        b.iter(|| {
            let mut count = 0usize;
            each_bfs(
                Direct::new(&graph),
                black_box(root),
                EventMask::ALL,
                |_, _| count += 1,
                no_logging![],
            )
            .unwrap();
            count
        })
    });

    c.bench_function("each_dfs_undirected", |b| {
        b.iter(|| {
            let mut count = 0usize;
            each_dfs_undirected(
                Undirected::new(&graph),
                black_box(root),
                EventMask::ALL,
                |_, _| count += 1,
                no_logging![],
            );
            count
        })
    });

    c.bench_function("components", |b| {
        b.iter(|| components(black_box(&graph), None, true, no_logging![]))
    });

    c.bench_function("generated_subgraphs", |b| {
        b.iter(|| generated_subgraphs(Direct::new(black_box(&dag)), None, true, no_logging![]))
    });

    c.bench_function("top_sort", |b| {
        b.iter(|| top_sort(black_box(&dag), no_logging![]).unwrap())
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
