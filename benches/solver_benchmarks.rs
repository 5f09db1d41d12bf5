//! Benchmarks for the isolation branching solver and its cut primitive.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ktcut::generators::random_connected_graph;
use ktcut::instances;
use ktcut::prelude::*;
use std::collections::BTreeSet;

/// Benchmark the solver on the canonical hand-built instances.
fn bench_known_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("IsolationBranching");

    let cases = [
        ("four_spoke_cycle", instances::four_spoke_cycle()),
        ("pair_triangle", instances::pair_triangle()),
        ("pair_gadget", instances::pair_gadget()),
        ("triple_gadget", instances::triple_gadget()),
        ("dahlhaus_gadget", instances::dahlhaus_gadget()),
    ];
    for (name, (graph, terminals)) in cases {
        group.bench_function(name, |b| {
            let solver = IsolationBranching::new();
            b.iter(|| solver.solve(black_box(&graph), black_box(&terminals)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark the solver on seeded random graphs of growing size.
fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomGraphs");

    for n in [8, 10, 12, 14].iter() {
        let graph = random_connected_graph(*n, *n, 10, 7);
        let terminals = vec![0, 1, 2];
        let solver = IsolationBranching::new();

        group.bench_with_input(BenchmarkId::new("three_terminals", n), n, |b, _| {
            b.iter(|| solver.solve(black_box(&graph), black_box(&terminals)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark the minimum isolating cut primitive on its own.
fn bench_isolating_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("MinimumIsolatingCut");

    for n in [20, 40, 80].iter() {
        let graph = random_connected_graph(*n, 2 * n, 10, 11);
        let sources = BTreeSet::from([0]);
        let sinks: BTreeSet<usize> = BTreeSet::from([1, 2, 3]);

        group.bench_with_input(BenchmarkId::new("random", n), n, |b, _| {
            b.iter(|| {
                minimum_isolating_cut(black_box(&graph), black_box(&sources), black_box(&sinks))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_known_instances,
    bench_random_graphs,
    bench_isolating_cut
);
criterion_main!(benches);
