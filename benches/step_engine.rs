use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stepwise_sssp::graph::generators::lattice_graph;
use stepwise_sssp::graph::MapVertex;
use stepwise_sssp::{numeric_cost, MutableGraph, ShortestPathEngine, WeightedDirectedGraph, WeightedEdge};

// Random directed graph with roughly `edge_factor * n` edges
fn random_graph(n: usize, edge_factor: f64, seed: u64) -> WeightedDirectedGraph<usize, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedDirectedGraph::with_capacity(n);
    for v in 0..n {
        let _ = graph.add_vertex(v);
    }

    let edges = (edge_factor * n as f64) as usize;
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            // Duplicates are simply skipped
            let _ = graph.add_edge(&u, &v, rng.gen_range(1.0..100.0));
        }
    }
    graph
}

fn bench_run_to_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_to_completion");
    for &n in &[1_000usize, 10_000, 50_000] {
        let graph = random_graph(n, 2.0, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let mut engine = ShortestPathEngine::new(graph, Some(0), numeric_cost::<f64>);
                black_box(engine.run_to_completion())
            })
        });
    }
    group.finish();
}

fn bench_single_steps(c: &mut Criterion) {
    let graph = random_graph(10_000, 4.0, 7);
    c.bench_function("first_100_steps", |b| {
        b.iter_batched(
            || ShortestPathEngine::new(&graph, Some(0), numeric_cost::<f64>),
            |mut engine| {
                for _ in 0..100 {
                    black_box(engine.step());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lattice(c: &mut Criterion) {
    let graph = match lattice_graph(25, &mut StdRng::seed_from_u64(1)) {
        Ok(graph) => graph,
        Err(e) => panic!("lattice generation failed: {}", e),
    };
    let source = MapVertex::probe("0_0");

    c.bench_function("lattice_25x25", |b| {
        b.iter(|| {
            let mut engine = ShortestPathEngine::new(&graph, Some(source.clone()), WeightedEdge::cost);
            engine.run_to_completion();
            black_box(engine.shortest_path_to(&MapVertex::probe("24_24")))
        })
    });
}

criterion_group!(benches, bench_run_to_completion, bench_single_steps, bench_lattice);
criterion_main!(benches);
