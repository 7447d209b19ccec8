//! Core types and configuration for the compass-heading library

/// Default configuration constants
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5; // samples
pub const DEFAULT_TILT_THRESHOLD: f32 = 45.0; // degrees
pub const DEFAULT_NO_DATA_TIMEOUT_MS: u64 = 3_000; // milliseconds

/// One device-orientation sample as delivered by the host platform
///
/// Every field is independently optional: browsers deliver orientation events
/// with any combination of angles missing, and the vendor-specific
/// `webkit_compass_heading` field exists only on some platforms. A sample is
/// immutable once captured.
///
/// # Example
/// ```
/// use compass_heading::OrientationSample;
///
/// let sample = OrientationSample {
///     alpha: Some(120.0),
///     beta: Some(10.0),
///     gamma: Some(-4.0),
///     absolute: true,
///     ..Default::default()
/// };
/// assert!(sample.webkit_compass_heading.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationSample {
    /// Rotation around the Z axis in degrees (compass axis when flat)
    pub alpha: Option<f32>,
    /// Front-to-back tilt around the X axis in degrees
    pub beta: Option<f32>,
    /// Left-to-right tilt around the Y axis in degrees
    pub gamma: Option<f32>,
    /// Whether the angles are referenced to Earth (true North) rather than
    /// an arbitrary starting pose
    pub absolute: bool,
    /// Vendor-specific compass heading in degrees, 0 = North, present only
    /// on WebKit hosts
    pub webkit_compass_heading: Option<f32>,
}

/// Heading source selectable on a session
///
/// Exactly one source is active at a time; each maps a distinct raw sensor
/// signal to a heading estimate. See [`crate::sources`] for the per-source
/// estimate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadingSource {
    /// The vendor-specific `webkitCompassHeading` field
    Webkit,
    /// Absolute device orientation (tilt-compensated alpha)
    Absolute,
    /// Raw magnetometer X/Y field vector
    Magnetometer,
}

/// Session status surfaced to the display collaborator
///
/// All failures are expressed as transitions of this status, never as errors
/// returned from the sample path.
///
/// # Example
/// ```
/// use compass_heading::{HeadingSession, SessionStatus};
///
/// let session = HeadingSession::new();
/// assert_eq!(session.status(), SessionStatus::Initializing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    /// Waiting for the first usable sample
    #[default]
    Initializing,
    /// Headings are being produced
    Tracking,
    /// The user or host refused sensor access; samples are ignored until
    /// permission is requested again
    PermissionDenied,
    /// The active source's capability is absent on this host; other sources
    /// remain selectable
    Unsupported,
    /// No usable sample arrived within the configured timeout
    NoData,
}

/// Outcome of the host's asynchronous permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PermissionDecision {
    /// Sensor access granted
    Granted,
    /// Sensor access refused
    Denied,
}

/// Heading session settings
///
/// The smoothing window and tilt threshold are empirical constants from field
/// testing, not derived physics; both are kept configurable.
///
/// # Example
/// ```
/// use compass_heading::SessionSettings;
///
/// let settings = SessionSettings {
///     smoothing_window: 8,       // wider window, steadier needle
///     tilt_threshold: 60.0,      // tolerate more tilt before compensating
///     no_data_timeout_ms: 5_000, // patient host
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSettings {
    /// Number of heading estimates kept for circular-mean smoothing
    ///
    /// Larger windows suppress more jitter but lag behind fast rotation.
    /// Values below 1 are treated as 1.
    pub smoothing_window: usize,
    /// Tilt threshold in degrees separating "flat" from "upright" postures
    ///
    /// Tilt compensation is applied only when `|beta|` exceeds this angle.
    pub tilt_threshold: f32,
    /// Milliseconds of silence tolerated while initializing before the
    /// session reports [`SessionStatus::NoData`]
    pub no_data_timeout_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            tilt_threshold: DEFAULT_TILT_THRESHOLD,
            no_data_timeout_ms: DEFAULT_NO_DATA_TIMEOUT_MS,
        }
    }
}

/// Read-only view of a session for the display collaborator
///
/// Captures every output of one update in a single `Copy` struct: the
/// smoothed heading, the status, the active source, and the raw orientation
/// diagnostics intended for on-screen debugging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    /// Smoothed heading in degrees, [0, 360); 0 until the first estimate
    pub heading: f32,
    /// Current session status
    pub status: SessionStatus,
    /// Currently selected source, if any
    pub active_source: Option<HeadingSource>,
    /// Alpha angle from the most recent orientation sample
    pub alpha: Option<f32>,
    /// Beta angle from the most recent orientation sample
    pub beta: Option<f32>,
    /// Gamma angle from the most recent orientation sample
    pub gamma: Option<f32>,
    /// Absolute flag from the most recent orientation sample
    pub absolute: bool,
    /// Number of samples accepted since session start
    pub samples: u64,
}
