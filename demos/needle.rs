use compass_heading::{HeadingSession, HeadingSource};
use nalgebra::Vector3;

const SAMPLE_PERIOD_MS: u64 = 100; // 10 Hz sensor rate

fn main() {
    env_logger::init();

    let mut session = HeadingSession::new();
    session.select_source(HeadingSource::Magnetometer);

    let mut now_ms = 0;

    for step in 0..20 {
        // this loop should repeat each time a new magnetometer reading is available
        let angle = (step as f32 * 9.0).to_radians();
        let field = Vector3::new(40.0 * angle.cos(), 40.0 * angle.sin(), -30.0); // replace this with actual magnetometer data in uT

        session.on_magnetometer(field, now_ms);
        session.poll(now_ms);

        println!(
            "t={:>4} ms  heading: {:6.2}  status: {:?}",
            now_ms,
            session.heading(),
            session.status()
        );

        now_ms += SAMPLE_PERIOD_MS;
    }
}
