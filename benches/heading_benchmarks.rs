use compass_heading::{
    CircularSmoother, HeadingSession, HeadingSource, OrientationSample, normalize_degrees, tilt,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

// Pre-generated magnetometer data to eliminate RNG overhead during benchmarks
struct FieldStream {
    fields: Vec<Vector3<f32>>,
    index: usize,
}

impl FieldStream {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut fields = Vec::with_capacity(count);

        for i in 0..count {
            // Slowly rotating horizontal field with measurement jitter
            let angle = i as f32 * 0.02 * 2.0 * PI;

            fields.push(Vector3::new(
                40.0 * angle.cos() + rng.random_range(-2.0..2.0), // uT
                40.0 * angle.sin() + rng.random_range(-2.0..2.0),
                -30.0 + rng.random_range(-2.0..2.0),
            ));
        }

        Self { fields, index: 0 }
    }

    fn next(&mut self) -> Vector3<f32> {
        let field = self.fields[self.index];
        self.index = (self.index + 1) % self.fields.len();
        field
    }
}

/// Benchmark a single push through the circular smoother
fn bench_smoother_push(c: &mut Criterion) {
    let mut smoother = CircularSmoother::new(5);

    c.bench_function("smoother_push", |b| {
        b.iter(|| smoother.push(black_box(137.5)))
    });
}

/// Benchmark tilt compensation for an upright device
fn bench_tilt_compensate(c: &mut Criterion) {
    c.bench_function("tilt_compensate", |b| {
        b.iter(|| {
            tilt::compensate(
                black_box(123.0),
                black_box(Some(80.0)),
                black_box(Some(30.0)),
                black_box(45.0),
            )
        })
    });
}

/// Benchmark angle normalization
fn bench_normalize_degrees(c: &mut Criterion) {
    c.bench_function("normalize_degrees", |b| {
        b.iter(|| normalize_degrees(black_box(-1234.5)))
    });
}

/// Benchmark one magnetometer reading through the session
fn bench_session_magnetometer_update(c: &mut Criterion) {
    let mut session = HeadingSession::new();
    session.select_source(HeadingSource::Magnetometer);

    // Realistic Earth field in uT
    let field = Vector3::new(25.0, 2.0, -15.0);

    c.bench_function("session_magnetometer_update", |b| {
        b.iter(|| session.on_magnetometer(black_box(field), black_box(16)))
    });
}

/// Benchmark one orientation sample through the absolute source
fn bench_session_orientation_update(c: &mut Criterion) {
    let mut session = HeadingSession::new();
    session.select_source(HeadingSource::Absolute);

    let sample = OrientationSample {
        alpha: Some(120.0),
        beta: Some(70.0),
        gamma: Some(20.0),
        absolute: true,
        ..Default::default()
    };

    c.bench_function("session_orientation_update", |b| {
        b.iter(|| session.on_orientation(black_box(&sample), black_box(16)))
    });
}

/// Benchmark a burst of magnetometer readings from a pre-generated stream
fn bench_session_stream(c: &mut Criterion) {
    let mut session = HeadingSession::new();
    session.select_source(HeadingSource::Magnetometer);
    let mut stream = FieldStream::new(1024, 42);

    c.bench_function("session_stream_100_readings", |b| {
        b.iter(|| {
            for _ in 0..100 {
                session.on_magnetometer(black_box(stream.next()), black_box(16));
            }
        })
    });
}

/// Benchmark session creation
fn bench_session_creation(c: &mut Criterion) {
    c.bench_function("session_new", |b| b.iter(|| black_box(HeadingSession::new())));
}

/// Benchmark snapshot retrieval
fn bench_session_snapshot(c: &mut Criterion) {
    let mut session = HeadingSession::new();
    session.select_source(HeadingSource::Magnetometer);
    session.on_magnetometer(Vector3::new(25.0, 2.0, -15.0), 16);

    c.bench_function("session_snapshot", |b| {
        b.iter(|| black_box(session.snapshot()))
    });
}

criterion_group!(
    benches,
    bench_smoother_push,
    bench_tilt_compensate,
    bench_normalize_degrees,
    bench_session_magnetometer_update,
    bench_session_orientation_update,
    bench_session_stream,
    bench_session_creation,
    bench_session_snapshot
);

criterion_main!(benches);
