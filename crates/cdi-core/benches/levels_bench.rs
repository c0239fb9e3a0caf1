//! Criterion benchmarks for [`DomainLevels`].
//!
//! Run with:
//! ```bash
//! cargo bench --package cdi-core --bench levels_bench
//! ```

use cdi_core::DomainLevels;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_domain_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain_levels");

    for hostname in ["com", "www.google.com", "a.b.c.d.e.f.g.example.co.uk"] {
        group.bench_with_input(BenchmarkId::from_parameter(hostname), hostname, |b, h| {
            b.iter(|| DomainLevels::new(black_box(h)).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_domain_levels);
criterion_main!(benches);
