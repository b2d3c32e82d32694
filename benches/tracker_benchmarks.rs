//! Tracker benchmarks using Criterion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pointlink::{closest_point, GapPolicy, GreedyTracker, Point, PointSerie, TrackingParams};

/// Create a sequence of frames with `n` spots moving diagonally.
fn create_test_frames(n_frames: usize, n: usize) -> Vec<PointSerie> {
    (0..n_frames)
        .map(|t| {
            (0..n)
                .map(|i| {
                    let x = (i * 100) as f64 + t as f64;
                    let y = (i * 50) as f64 + t as f64 * 0.5;
                    Point::tagged(x, y, if i % 2 == 0 { "Prox" } else { "-" })
                })
                .collect()
        })
        .collect()
}

fn benchmark_link(c: &mut Criterion, name: &str, n_frames: usize, n: usize, policy: GapPolicy) {
    let params = TrackingParams::new(5.0, 3).with_gap_policy(policy);
    let tracker = GreedyTracker::new(params).expect("valid tracker");
    let frames = create_test_frames(n_frames, n);

    c.bench_function(name, |b| {
        b.iter(|| tracker.link(black_box(&frames)));
    });
}

fn benchmark_link_50_frames_10_spots(c: &mut Criterion) {
    benchmark_link(c, "link_50_frames_10_spots", 50, 10, GapPolicy::Stop);
}

fn benchmark_link_100_frames_50_spots(c: &mut Criterion) {
    benchmark_link(c, "link_100_frames_50_spots", 100, 50, GapPolicy::Stop);
}

fn benchmark_link_100_frames_100_spots(c: &mut Criterion) {
    benchmark_link(c, "link_100_frames_100_spots", 100, 100, GapPolicy::Stop);
}

fn benchmark_link_100_frames_100_spots_bridge(c: &mut Criterion) {
    benchmark_link(c, "link_100_frames_100_spots_bridge", 100, 100, GapPolicy::Bridge);
}

fn benchmark_closest_point_1000(c: &mut Criterion) {
    let candidates = create_test_frames(1, 1000).remove(0);
    let reference = Point::new(25_000.0, 12_500.0);

    c.bench_function("closest_point_1000", |b| {
        b.iter(|| closest_point(black_box(&reference), black_box(&candidates)));
    });
}

criterion_group!(
    benches,
    benchmark_link_50_frames_10_spots,
    benchmark_link_100_frames_50_spots,
    benchmark_link_100_frames_100_spots,
    benchmark_link_100_frames_100_spots_bridge,
    benchmark_closest_point_1000,
);
criterion_main!(benches);
