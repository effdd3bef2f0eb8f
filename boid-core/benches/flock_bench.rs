use boid_core::{Bounds, Flock, FlockParams};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn bench_step_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_all");
    group.measurement_time(Duration::from_secs(5));

    let bounds = Bounds::new(800.0, 600.0);
    let params = FlockParams::default();

    // the host's slider tops out at 300 boids
    for count in [10_usize, 100, 300] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(0xB01D);
                    let mut flock = Flock::new();
                    flock.grow_with_rng(count, bounds, &mut rng);
                    flock
                },
                |mut flock| {
                    flock.step_all(black_box(&params), bounds);
                    flock
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step_all);
criterion_main!(benches);
