use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar_booleans::core::math::{vec2, Vector2};
use planar_booleans::polygon::{union, BooleanOp, Polygon};

/// Regular n-gon approximating a circle, offset so benchmarks overlap.
fn ngon(n: usize, cx: f64, cy: f64, r: f64) -> Polygon {
    let points: Vec<Vector2<f64>> = (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            vec2(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect();
    Polygon::from_points(&points)
}

fn polygon_area_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_area");
    for &n in &[16, 64, 256, 1024] {
        let polygon = ngon(n, 0.0, 0.0, 10.0);
        group.bench_with_input(BenchmarkId::new("ngon", n), &polygon, |b, p| {
            b.iter(|| p.area())
        });
    }
    group.finish();
}

fn point_location_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_location");
    for &n in &[16, 64, 256, 1024] {
        let polygon = ngon(n, 0.0, 0.0, 10.0);
        group.bench_with_input(BenchmarkId::new("inside", n), &polygon, |b, p| {
            b.iter(|| p.point_location(vec2(1.0, 2.0), 1e-5))
        });
    }
    group.finish();
}

fn boolean_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("boolean_ops");
    for &n in &[16, 64, 256] {
        let a = ngon(n, 0.0, 0.0, 10.0);
        let b = ngon(n, 8.0, 0.0, 10.0);
        group.bench_with_input(BenchmarkId::new("union", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| union(*a, *b).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("intersect", n),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| a.boolean(b, BooleanOp::Intersect).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    polygon_area_group,
    point_location_group,
    boolean_group
);
criterion_main!(benches);
