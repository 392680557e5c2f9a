use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use ubridges::{algo::*, gens::*, prelude::*};

/// Connected random graphs with an average degree of roughly 4
fn instance(n: NumNodes, seed: u64) -> AdjList {
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);
    AdjList::connected_gnp(rng, n, 3.0 / n as f64)
}

fn eulerian_instance(n: NumNodes, seed: u64) -> AdjList {
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);
    AdjList::eulerian_gnp(rng, n, 3.0 / n as f64, EulerianParity::Path)
}

fn bench_bridges(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridges");

    for n in [100, 1_000, 10_000] {
        let mut graph = instance(n, n as u64);

        group.bench_with_input(BenchmarkId::new("tarjan", n), &n, |b, _| {
            b.iter(|| black_box(TarjanBridges::new().find_bridges(&mut graph)));
        });

        // The quadratic baseline is only feasible on the smaller instances
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
                b.iter(|| black_box(NaiveBridges::new().find_bridges(&mut graph)));
            });
        }
    }

    group.finish();
}

fn bench_eulerian(c: &mut Criterion) {
    let mut group = c.benchmark_group("eulerian");
    group.sample_size(10);

    for n in [50, 200] {
        let graph = eulerian_instance(n, n as u64);

        // Each run consumes the edges, so every iteration gets a fresh clone
        group.bench_with_input(BenchmarkId::new("fleury_tarjan", n), &n, |b, _| {
            b.iter_batched(
                || graph.clone(),
                |mut g| black_box(g.find_eulerian_path()),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("fleury_naive", n), &n, |b, _| {
            b.iter_batched(
                || graph.clone(),
                |mut g| black_box(g.find_eulerian_path_with(NaiveBridges::new())),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bridges, bench_eulerian);
criterion_main!(benches);
