use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_augment::graph::{articulation_points, mcs_m};
use floorplan_augment::{augment, augment_biconnectivity, Config, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sparse random graph: a random tree plus a few extra edges
fn random_graph(nodes: u32, extra_probability: f64, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_nodes(0..nodes);
    for child in 1..nodes {
        let parent = rng.random_range(0..child);
        let _ = graph.add_edge(parent, child);
    }
    for u in 0..nodes {
        for v in (u + 1)..nodes {
            if rng.random_bool(extra_probability) {
                let _ = graph.add_edge(u, v);
            }
        }
    }
    graph
}

fn path(nodes: u32) -> Graph<u32> {
    Graph::from_edges(0..nodes, (1..nodes).map(|i| (i - 1, i))).expect("path is simple")
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("augmentation");
    for &nodes in &[50u32, 200, 800] {
        let graph = random_graph(nodes, 2.0 / nodes as f64, 42);

        group.bench_with_input(BenchmarkId::new("articulation_points", nodes), &graph, |b, g| {
            b.iter(|| black_box(articulation_points(g)))
        });
        group.bench_with_input(BenchmarkId::new("biconnect", nodes), &graph, |b, g| {
            b.iter(|| black_box(augment_biconnectivity(g)))
        });
        group.bench_with_input(BenchmarkId::new("mcs_m", nodes), &graph, |b, g| {
            b.iter(|| black_box(mcs_m(g)))
        });
        group.bench_with_input(BenchmarkId::new("pipeline", nodes), &graph, |b, g| {
            let config = Config::default();
            b.iter(|| black_box(augment(g, &config)))
        });
    }
    group.finish();

    let long_path = path(100_000);
    c.bench_function("articulation_points_long_path", |b| {
        b.iter(|| black_box(articulation_points(&long_path)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
