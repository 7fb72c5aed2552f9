// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sweep throughput benchmarks
//!
//! The dense case measures raw append bookkeeping; the sparse case is the
//! realistic workload (low connection probability over a large product).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use syngen_wiring::{AllPairs, Population, SeededDraws, SynapticConnections};

fn bench_dense_sweep(c: &mut Criterion) {
    c.bench_function("dense_sweep_200x200", |b| {
        b.iter(|| {
            let mut connections = SynapticConnections::new(200, 200);
            let mut rule = AllPairs::new(Population::new(200), Population::new(200));
            connections
                .connect(&mut rule, &SeededDraws::new(0), 200, 200)
                .unwrap();
            black_box(connections.synapse_count())
        })
    });
}

fn bench_sparse_sweep(c: &mut Criterion) {
    c.bench_function("sparse_sweep_1000x1000_p02", |b| {
        b.iter(|| {
            let mut connections = SynapticConnections::new(1000, 1000);
            let mut rule = AllPairs::new(Population::new(1000), Population::new(1000))
                .with_probability(0.02);
            connections
                .connect(&mut rule, &SeededDraws::new(7), 1000, 1000)
                .unwrap();
            black_box(connections.synapse_count())
        })
    });
}

criterion_group!(benches, bench_dense_sweep, bench_sparse_sweep);
criterion_main!(benches);
