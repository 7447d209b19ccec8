//! Guidance arrow demonstration
//!
//! This example tracks how far the device has rotated away from the pose it
//! started in, the way an on-screen arrow keeps pointing at a target while
//! the user turns. It also walks the sensor permission flow and prints the
//! session diagnostics snapshot at the end.
//!
//! Features demonstrated:
//! - Permission request and result handling
//! - Absolute-orientation heading with tilt compensation
//! - Relative rotation against a captured reference pose
//! - Session diagnostics snapshots
//!
//! Run with: `cargo run --example arrow`

use compass_heading::{
    HeadingSession, HeadingSource, OrientationSample, PermissionDecision, RotationTracker,
};

const SAMPLE_PERIOD_MS: u64 = 100; // 10 Hz sensor rate

fn main() {
    env_logger::init();

    let mut session = HeadingSession::new();
    session.select_source(HeadingSource::Absolute);

    // Hosts show their permission prompt between these two calls
    session.request_permission();
    session.permission_result(PermissionDecision::Granted);

    let mut tracker = RotationTracker::new();
    let mut now_ms = 0;

    println!("Sweeping the device; the arrow counters the rotation.");

    for step in 0..12 {
        // replace this with actual orientation data in degrees
        let sample = OrientationSample {
            alpha: Some(30.0 + step as f32 * 5.0),
            beta: Some(60.0 - step as f32 * 4.0),
            gamma: Some(step as f32 * 4.0),
            absolute: true,
            ..Default::default()
        };

        session.on_orientation(&sample, now_ms);
        let rotation = tracker.update(sample.beta, sample.gamma);

        println!(
            "t={:>4} ms  heading: {:6.2}  arrow: {:.2?}",
            now_ms,
            session.heading(),
            rotation
        );

        now_ms += SAMPLE_PERIOD_MS;
    }

    let snapshot = session.snapshot();
    println!(
        "\nFinal state: status={:?} source={:?} samples={}",
        snapshot.status, snapshot.active_source, snapshot.samples
    );
}
