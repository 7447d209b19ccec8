//! Rotation tracking relative to an initial device pose

use crate::math::{RAD_TO_DEG, normalize_degrees};

/// Tracker for rotation relative to a captured starting pose
///
/// Unlike a compass heading, the rotation reported here is referenced to
/// whatever pose the device was in when tracking began: the first usable
/// sample captures that pose, and every later sample reports how far the
/// device has turned away from it. This backs "arrow keeps pointing where
/// you started" displays that need no absolute orientation capability.
///
/// The pose angle is the planar `atan2(gamma, beta)` angle of the tilt
/// vector, which works best with the device held upright.
///
/// # Example
/// ```
/// use compass_heading::RotationTracker;
///
/// let mut tracker = RotationTracker::new();
///
/// // First sample captures the reference pose
/// assert_eq!(tracker.update(Some(1.0), Some(0.0)), Some(0.0));
///
/// // Rolled a quarter turn from the captured pose
/// let rotation = tracker.update(Some(0.0), Some(1.0)).unwrap();
/// assert!((rotation + 90.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationTracker {
    /// Pose angle captured from the first usable sample, in degrees
    reference: Option<f32>,
    /// Last computed rotation, in degrees, (-180, 180]
    rotation: f32,
}

impl RotationTracker {
    /// Create a tracker with no reference pose captured yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one orientation sample and return the rotation from the reference
    ///
    /// Both tilt angles are required; a sample with either angle missing or
    /// non-finite returns `None` and leaves the tracker untouched. The first
    /// usable sample captures the reference pose and reports a rotation of 0.
    ///
    /// # Arguments
    /// * `beta` - Front-to-back tilt in degrees, if known
    /// * `gamma` - Left-to-right tilt in degrees, if known
    ///
    /// # Returns
    /// Signed rotation from the reference pose in degrees, wrapped to
    /// (-180, 180] so the display never spins a full turn at the atan2
    /// discontinuity
    pub fn update(&mut self, beta: Option<f32>, gamma: Option<f32>) -> Option<f32> {
        let (beta, gamma) = match (beta, gamma) {
            (Some(b), Some(g)) if b.is_finite() && g.is_finite() => (b, g),
            _ => return None,
        };

        let current = pose_angle(beta, gamma);
        let reference = *self.reference.get_or_insert(current);

        self.rotation = wrap_signed(reference - current);
        Some(self.rotation)
    }

    /// Last computed rotation in degrees; 0 until the first usable sample
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Whether a reference pose has been captured
    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Drop the reference pose so the next usable sample re-captures it
    pub fn reset(&mut self) {
        self.reference = None;
        self.rotation = 0.0;
    }
}

/// Planar pose angle of the tilt vector in degrees
fn pose_angle(beta: f32, gamma: f32) -> f32 {
    gamma.atan2(beta) * RAD_TO_DEG
}

/// Wrap an angle difference to the signed (-180, 180] range
fn wrap_signed(angle: f32) -> f32 {
    let wrapped = normalize_degrees(angle);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
