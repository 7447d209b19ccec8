//! Compass heading engine with circular smoothing and tilt compensation
//!
//! This library turns raw device orientation and magnetometer signals into a
//! stable compass heading. It supports three heading sources behind one
//! session API, smooths estimates with a circular mean that treats the
//! 0/360 wraparound correctly, and compensates the heading when the device
//! is held upright instead of flat. Sensor trouble surfaces as session
//! status values rather than errors, so a glitchy stream can never abort
//! the session.
//!
//! The engine keeps no clock and spawns no threads: hosts feed samples and
//! timestamps in and poll for timeouts, which makes every run deterministic
//! and testable.
//!
//! # Features
//!
//! - Circular-mean smoothing over a sliding window of heading estimates
//! - Tilt compensation for upright device postures
//! - Three heading sources: vendor compass field, absolute orientation, raw magnetometer
//! - Relative rotation tracking against a captured reference pose
//! - Permission and no-data failure handling as status transitions
//! - Host-driven time for deterministic replay
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_heading::{HeadingSession, HeadingSource, SessionStatus};
//!
//! let mut session = HeadingSession::new();
//! session.select_source(HeadingSource::Magnetometer);
//!
//! // Field along +X means the device faces east
//! let heading = session
//!     .on_magnetometer(Vector3::new(1.0, 0.0, 0.0), 16)
//!     .unwrap();
//!
//! assert!((heading - 90.0).abs() < 1e-3);
//! assert_eq!(session.status(), SessionStatus::Tracking);
//! ```

mod math;
pub mod relative;
mod session;
pub mod smoothing;
pub mod sources;
pub mod tilt;
mod types;

// Re-export all public types and functions
pub use math::{DEG_TO_RAD, RAD_TO_DEG, normalize_degrees};
pub use relative::RotationTracker;
pub use session::HeadingSession;
pub use smoothing::CircularSmoother;
pub use sources::{absolute_heading, magnetometer_heading, webkit_heading};
pub use types::*;
