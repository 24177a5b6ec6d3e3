//! Benchmarks for geometry and direction classification

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use head_direction::classification::classify;
use head_direction::geometry::{distance, tilt_angle_degrees, Point2D};
use head_direction::landmarks::FaceLandmarks;

fn upward_marks() -> FaceLandmarks {
    FaceLandmarks {
        left_eye_outer: Point2D::new(100.0, 100.0),
        right_eye_outer: Point2D::new(200.0, 100.0),
        nose_tip: Point2D::new(150.0, 130.0),
        forehead: Point2D::new(150.0, 80.0),
        chin: Point2D::new(150.0, 200.0),
    }
}

fn benchmark_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let a = Point2D::new(150.0, 80.0);
    let b = Point2D::new(150.0, 130.0);
    group.bench_function("distance", |bench| {
        bench.iter(|| black_box(distance(black_box(a), black_box(b))));
    });

    let left = Point2D::new(100.0, 100.0);
    let right = Point2D::new(200.0, 150.0);
    group.bench_function("tilt_angle", |bench| {
        bench.iter(|| black_box(tilt_angle_degrees(black_box(left), black_box(right))));
    });

    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let marks = upward_marks();
    c.bench_function("classify", |bench| {
        bench.iter(|| black_box(classify(black_box(&marks))));
    });
}

criterion_group!(benches, benchmark_geometry, benchmark_classification);
criterion_main!(benches);
