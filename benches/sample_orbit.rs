use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use neoscene::impact_energy::estimate_impact_energy_kt;
use neoscene::trajectory::{sample_orbit, sample_orbit_with, SamplingMode};

/// Uniform-angle sampling at increasing resolutions, Eros-like elements.
fn bench_uniform_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_orbit/uniform_angle");
    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(sample_orbit(black_box(0.2228), black_box(1.458), n)))
        });
    }
    group.finish();
}

/// Time-uniform sampling: one Kepler solve per point.
fn bench_time_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_orbit/time_uniform");
    for e in [0.0167, 0.5, 0.9] {
        group.bench_with_input(BenchmarkId::from_parameter(e), &e, |b, &e| {
            b.iter(|| {
                black_box(sample_orbit_with(black_box(e), 1.0, 100, SamplingMode::TimeUniform).ok())
            })
        });
    }
    group.finish();
}

fn bench_impact_energy(c: &mut Criterion) {
    c.bench_function("estimate_impact_energy_kt", |b| {
        b.iter(|| estimate_impact_energy_kt(black_box(140.0), black_box(19.5), black_box(3000.0)))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_uniform_angle, bench_time_uniform, bench_impact_energy
);
criterion_main!(benches);
