//! Benchmarks for 2D slicing and meshing.
//!
//! Measures half-plane and stroke splits and ear clipping on polygons of
//! increasing vertex count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jigcut_d2::{triangulate, Config, Polygon2D, PolygonSlicer};

fn star(n: usize) -> Polygon2D {
    let vertices = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let r = if i % 2 == 0 { 2.0 } else { 1.2 };
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    Polygon2D::new(vertices).expect("star polygon is valid")
}

fn bench_split_by_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_by_line");
    let slicer = PolygonSlicer::default();

    for &n in &[8, 32, 128] {
        let poly = star(n);
        group.bench_with_input(BenchmarkId::new("star", n), &poly, |b, p| {
            b.iter(|| slicer.split_by_line(black_box(p), (-3.0, 0.1), (3.0, -0.1)))
        });
    }
    group.finish();
}

fn bench_split_by_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_by_path");
    group.sample_size(20);
    let slicer = PolygonSlicer::new(&Config::default().with_cut_width(0.02));
    let path = [(-3.0, 0.0), (-1.0, 0.8), (1.0, -0.8), (3.0, 0.0)];

    for &n in &[8, 32, 128] {
        let poly = star(n);
        group.bench_with_input(BenchmarkId::new("star", n), &poly, |b, p| {
            b.iter(|| slicer.split_by_path(black_box(p), black_box(&path)))
        });
    }
    group.finish();
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for &n in &[8, 32, 128] {
        let poly = star(n);
        group.bench_with_input(BenchmarkId::new("star", n), &poly, |b, p| {
            b.iter(|| triangulate(black_box(p.vertices())))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_split_by_line,
    bench_split_by_path,
    bench_triangulate
);
criterion_main!(benches);
