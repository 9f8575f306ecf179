//! Benchmarks for polyline simplification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shapekit::simplify::{rdp, single_pass};
use shapekit::{Point2, Polygon};

/// Generates a noisy sine wave polyline.
fn generate_sine_wave(num_points: usize) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * 4.0 * std::f64::consts::PI;
            let noise = ((i * 17) % 100) as f64 / 1000.0; // Deterministic "noise"
            Point2::new(t, t.sin() + noise)
        })
        .collect()
}

/// Generates a freehand-style stroke as a random walk.
fn generate_stroke(num_points: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(num_points);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut state = seed;

    for _ in 0..num_points {
        points.push(Point2::new(x, y));

        // xorshift
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        let angle = (state as f64 / u64::MAX as f64) * 2.0 * std::f64::consts::PI;
        x += angle.cos() * 0.1;
        y += angle.sin() * 0.1;
    }

    points
}

fn bench_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pass");

    for size in [100, 1000, 10000, 50000] {
        let points = generate_sine_wave(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sine_wave", size), &points, |b, pts| {
            b.iter(|| single_pass(black_box(pts), black_box(0.01)))
        });
    }

    for size in [1000, 10000] {
        let points = generate_stroke(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("stroke", size), &points, |b, pts| {
            b.iter(|| single_pass(black_box(pts), black_box(0.01)))
        });
    }

    group.finish();
}

fn bench_rdp(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdp");

    for size in [100, 1000, 10000, 50000] {
        let points = generate_sine_wave(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sine_wave", size), &points, |b, pts| {
            b.iter(|| rdp(black_box(pts), black_box(0.01)))
        });
    }

    group.finish();
}

fn bench_polygon_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_simplify");

    for size in [64, 1024, 16384] {
        let mut poly = Polygon::new(generate_stroke(size, 777));
        poly.close();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("closed_stroke", size), &poly, |b, p| {
            b.iter(|| black_box(p).simplify(black_box(0.05)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_pass, bench_rdp, bench_polygon_simplify);
criterion_main!(benches);
