//! Heading session state machine

use log::{debug, trace, warn};
use nalgebra::Vector3;

use crate::smoothing::CircularSmoother;
use crate::sources;
use crate::types::{
    HeadingSource, OrientationSample, PermissionDecision, SessionSettings, SessionSnapshot,
    SessionStatus,
};

/// Orchestrator for one compass session
///
/// Owns the active source selection, the smoothing window, the session
/// status, and the raw diagnostics for the display collaborator. Samples are
/// pushed in by the host's event dispatch (`on_orientation`,
/// `on_magnetometer`); all failures surface as status transitions, never as
/// errors, so no sample can abort the session.
///
/// The session keeps no clock of its own: hosts pass a millisecond timestamp
/// into the sample entry points and drive the no-data timeout by calling
/// [`HeadingSession::poll`]. All calls are expected from a single event loop;
/// a multi-threaded host wraps the session in one mutex held per call.
///
/// # Example
/// ```
/// use compass_heading::{HeadingSession, HeadingSource, SessionStatus};
/// use nalgebra::Vector3;
///
/// let mut session = HeadingSession::new();
/// session.select_source(HeadingSource::Magnetometer);
///
/// let heading = session
///     .on_magnetometer(Vector3::new(1.0, 0.0, 0.0), 16)
///     .unwrap();
/// assert!((heading - 90.0).abs() < 1e-3);
/// assert_eq!(session.status(), SessionStatus::Tracking);
/// ```
#[derive(Debug, Clone)]
pub struct HeadingSession {
    /// Session configuration
    settings: SessionSettings,
    /// Sliding window over recent heading estimates
    smoother: CircularSmoother,
    /// Current status surfaced to the host
    status: SessionStatus,
    /// Currently selected source, if any
    active_source: Option<HeadingSource>,
    /// Alpha angle from the most recent orientation sample
    alpha: Option<f32>,
    /// Beta angle from the most recent orientation sample
    beta: Option<f32>,
    /// Gamma angle from the most recent orientation sample
    gamma: Option<f32>,
    /// Absolute flag from the most recent orientation sample
    absolute: bool,
    /// Whether a permission request is awaiting its result
    permission_pending: bool,
    /// When the current initializing phase started, for the no-data timeout
    waiting_since_ms: Option<u64>,
    /// Samples accepted since session start
    samples: u64,
}

impl HeadingSession {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default())
    }

    /// Create a session with the given settings
    ///
    /// # Example
    /// ```
    /// use compass_heading::{HeadingSession, SessionSettings};
    ///
    /// let session = HeadingSession::with_settings(SessionSettings {
    ///     smoothing_window: 10,
    ///     ..Default::default()
    /// });
    /// assert_eq!(session.settings().smoothing_window, 10);
    /// ```
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            settings,
            smoother: CircularSmoother::new(settings.smoothing_window),
            status: SessionStatus::Initializing,
            active_source: None,
            alpha: None,
            beta: None,
            gamma: None,
            absolute: false,
            permission_pending: false,
            waiting_since_ms: None,
            samples: 0,
        }
    }

    /// Switch the active heading source
    ///
    /// The smoothing history is deliberately kept across switches so the
    /// displayed heading glides instead of jumping; the prior source can
    /// influence the mean for up to one window of samples. The status returns
    /// to `Initializing` with a fresh no-data window, unless permission is
    /// currently denied (which only a new permission request clears).
    pub fn select_source(&mut self, source: HeadingSource) {
        if self.active_source != Some(source) {
            debug!("heading source selected: {:?}", source);
        }

        self.active_source = Some(source);
        self.waiting_since_ms = None;

        if self.status != SessionStatus::PermissionDenied {
            self.transition(SessionStatus::Initializing);
        }
    }

    /// Feed one device-orientation sample
    ///
    /// The sample always refreshes the alpha/beta/gamma/absolute diagnostics.
    /// If an orientation-based source is active and yields an estimate, the
    /// estimate is pushed through the smoother, the status becomes
    /// `Tracking`, and the updated smoothed heading is returned. A sample the
    /// active source cannot use reports that source's failure status and
    /// leaves the history untouched.
    ///
    /// # Arguments
    /// * `sample` - Orientation sample from the host event stream
    /// * `now_ms` - Host timestamp in milliseconds
    ///
    /// # Returns
    /// Updated smoothed heading, or `None` when the sample produced no
    /// estimate
    pub fn on_orientation(&mut self, sample: &OrientationSample, now_ms: u64) -> Option<f32> {
        if self.status == SessionStatus::PermissionDenied {
            trace!("orientation sample dropped: permission denied");
            return None;
        }

        self.alpha = sample.alpha;
        self.beta = sample.beta;
        self.gamma = sample.gamma;
        self.absolute = sample.absolute;
        self.samples += 1;
        self.stamp_waiting(now_ms);

        let source = match self.active_source {
            Some(source) => source,
            None => {
                trace!("orientation sample dropped: no source selected");
                return None;
            }
        };

        let estimate = match source {
            HeadingSource::Webkit => sources::webkit_heading(sample),
            HeadingSource::Absolute => {
                sources::absolute_heading(sample, self.settings.tilt_threshold)
            }
            HeadingSource::Magnetometer => {
                trace!("orientation sample dropped: magnetometer source active");
                return None;
            }
        };

        self.apply_estimate(source, estimate)
    }

    /// Feed one magnetometer reading
    ///
    /// Only the horizontal X/Y components enter the heading. Readings are
    /// ignored unless the magnetometer source is active.
    ///
    /// # Arguments
    /// * `magnetometer` - Field vector from the host magnetometer stream
    /// * `now_ms` - Host timestamp in milliseconds
    ///
    /// # Returns
    /// Updated smoothed heading, or `None` when the reading produced no
    /// estimate
    pub fn on_magnetometer(&mut self, magnetometer: Vector3<f32>, now_ms: u64) -> Option<f32> {
        if self.status == SessionStatus::PermissionDenied {
            trace!("magnetometer reading dropped: permission denied");
            return None;
        }

        self.samples += 1;
        self.stamp_waiting(now_ms);

        if self.active_source != Some(HeadingSource::Magnetometer) {
            trace!("magnetometer reading dropped: magnetometer source not active");
            return None;
        }

        self.apply_estimate(
            HeadingSource::Magnetometer,
            sources::magnetometer_heading(magnetometer),
        )
    }

    /// Mark a permission request as in flight
    ///
    /// Hosts call this when they show the sensor permission prompt and
    /// [`HeadingSession::permission_result`] once it resolves. Requesting
    /// re-opens a `PermissionDenied` session. While a request is pending the
    /// no-data timeout is suspended; the prompt has no deadline.
    pub fn request_permission(&mut self) {
        debug!("sensor permission requested");
        self.permission_pending = true;
        self.waiting_since_ms = None;

        if self.status == SessionStatus::PermissionDenied {
            self.transition(SessionStatus::Initializing);
        }
    }

    /// Apply the outcome of the host's permission prompt
    ///
    /// Results delivered while no request is pending are ignored, which is
    /// what makes the request cancelable: reset the session (or simply never
    /// forward the result) and a late grant or denial has no effect.
    pub fn permission_result(&mut self, decision: PermissionDecision) {
        if !self.permission_pending {
            trace!("permission result ignored: no request pending");
            return;
        }

        self.permission_pending = false;

        match decision {
            PermissionDecision::Granted => {
                self.waiting_since_ms = None;
                if self.status != SessionStatus::Tracking {
                    self.transition(SessionStatus::Initializing);
                }
            }
            PermissionDecision::Denied => {
                warn!("sensor permission denied");
                self.transition(SessionStatus::PermissionDenied);
            }
        }
    }

    /// Advance the no-data timeout and return the current status
    ///
    /// While the session is `Initializing`, the first poll starts the clock;
    /// once `no_data_timeout_ms` elapses without a usable estimate the status
    /// becomes `NoData`. The timeout never fires while a permission request
    /// is pending, and selecting a source or resolving a permission request
    /// restarts the window.
    ///
    /// # Arguments
    /// * `now_ms` - Host timestamp in milliseconds
    pub fn poll(&mut self, now_ms: u64) -> SessionStatus {
        if self.permission_pending {
            return self.status;
        }

        if self.status == SessionStatus::Initializing {
            match self.waiting_since_ms {
                None => self.waiting_since_ms = Some(now_ms),
                Some(since) => {
                    if now_ms.saturating_sub(since) >= self.settings.no_data_timeout_ms {
                        warn!(
                            "no usable sensor data within {} ms",
                            self.settings.no_data_timeout_ms
                        );
                        self.transition(SessionStatus::NoData);
                    }
                }
            }
        }

        self.status
    }

    /// Return the session to its initial state, keeping the settings
    pub fn reset(&mut self) {
        debug!("session reset");
        self.smoother.clear();
        self.status = SessionStatus::Initializing;
        self.active_source = None;
        self.alpha = None;
        self.beta = None;
        self.gamma = None;
        self.absolute = false;
        self.permission_pending = false;
        self.waiting_since_ms = None;
        self.samples = 0;
    }

    /// Current smoothed heading in degrees, [0, 360); 0 before the first estimate
    pub fn heading(&self) -> f32 {
        self.smoother.smoothed()
    }

    /// Current session status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Currently selected source, if any
    pub fn active_source(&self) -> Option<HeadingSource> {
        self.active_source
    }

    /// Number of heading estimates currently in the smoothing window
    pub fn history_len(&self) -> usize {
        self.smoother.len()
    }

    /// Current settings
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Replace the settings, trimming the smoothing window if it shrank
    pub fn set_settings(&mut self, settings: SessionSettings) {
        self.settings = settings;
        self.smoother.set_capacity(settings.smoothing_window);
    }

    /// Read-only snapshot of everything the display collaborator consumes
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            heading: self.smoother.smoothed(),
            status: self.status,
            active_source: self.active_source,
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            absolute: self.absolute,
            samples: self.samples,
        }
    }

    /// Push an estimate through the smoother, or report the source's failure
    fn apply_estimate(&mut self, source: HeadingSource, estimate: Option<f32>) -> Option<f32> {
        match estimate {
            Some(estimate) => {
                let smoothed = self.smoother.push(estimate);
                self.transition(SessionStatus::Tracking);
                Some(smoothed)
            }
            None => {
                // History stays untouched; the failure shows up as status only
                match failure_status(source) {
                    Some(failure) => self.transition(failure),
                    None => trace!("unusable {:?} sample skipped", source),
                }
                None
            }
        }
    }

    /// Start the no-data clock if the initializing phase has no timestamp yet
    fn stamp_waiting(&mut self, now_ms: u64) {
        if self.status == SessionStatus::Initializing && self.waiting_since_ms.is_none() {
            self.waiting_since_ms = Some(now_ms);
        }
    }

    /// Move to `next`, logging the edge; no-op when already there
    fn transition(&mut self, next: SessionStatus) {
        if self.status != next {
            debug!("session status {:?} -> {:?}", self.status, next);
            self.status = next;
            self.waiting_since_ms = None;
        }
    }
}

impl Default for HeadingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Status a source reports when its signal yields no estimate
///
/// An orientation sample missing the vendor field or the absolute capability
/// proves that capability absent. A magnetometer reading with unusable
/// components is skipped silently; a dead magnetometer stream is caught by
/// the no-data timeout instead.
fn failure_status(source: HeadingSource) -> Option<SessionStatus> {
    match source {
        HeadingSource::Webkit | HeadingSource::Absolute => Some(SessionStatus::Unsupported),
        HeadingSource::Magnetometer => None,
    }
}
