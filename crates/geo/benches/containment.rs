//! Benchmarks for geo crate containment and distance primitives.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dayliz_geo::{haversine_distance, point_in_polygon, Coordinate};

fn create_ring(vertices: usize) -> Vec<Coordinate> {
    // Regular polygon around Guwahati, ~2 km across
    let center = Coordinate::new(26.1445, 91.7362);
    (0..vertices)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (vertices as f64);
            Coordinate::new(
                center.latitude + 0.01 * theta.sin(),
                center.longitude + 0.01 * theta.cos(),
            )
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let tura = Coordinate::new(25.5138, 90.2022);
    let guwahati = Coordinate::new(26.1445, 91.7362);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&tura), black_box(&guwahati)))
    });
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon");

    let inside = Coordinate::new(26.1445, 91.7362);
    let outside = Coordinate::new(26.5, 92.0);

    for size in [4usize, 16, 64, 256].iter() {
        let ring = create_ring(*size);

        group.bench_with_input(BenchmarkId::new("inside", size), size, |b, _| {
            b.iter(|| point_in_polygon(black_box(&inside), black_box(&ring)))
        });
        group.bench_with_input(BenchmarkId::new("outside", size), size, |b, _| {
            b.iter(|| point_in_polygon(black_box(&outside), black_box(&ring)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_point_in_polygon);
criterion_main!(benches);
