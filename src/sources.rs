//! Heading source adapters
//!
//! Three independent strategies for turning a raw sensor signal into a
//! heading estimate, one per [`crate::HeadingSource`] variant. Each adapter
//! is a pure function returning `Some(heading)` in [0, 360) or `None` when
//! its signal cannot yield an estimate; adapters never touch session state.

use nalgebra::Vector3;

use crate::math::{RAD_TO_DEG, normalize_degrees};
use crate::tilt;
use crate::types::OrientationSample;

/// Heading from the vendor-specific `webkitCompassHeading` field
///
/// The field already carries a compass heading (0 = North, clockwise), so the
/// value passes through normalization unchanged. Samples without the field,
/// or with a non-finite value, produce no estimate.
///
/// # Example
/// ```
/// use compass_heading::{OrientationSample, sources};
///
/// let sample = OrientationSample {
///     webkit_compass_heading: Some(120.0),
///     ..Default::default()
/// };
/// assert_eq!(sources::webkit_heading(&sample), Some(120.0));
/// assert_eq!(sources::webkit_heading(&OrientationSample::default()), None);
/// ```
pub fn webkit_heading(sample: &OrientationSample) -> Option<f32> {
    sample
        .webkit_compass_heading
        .filter(|heading| heading.is_finite())
        .map(normalize_degrees)
}

/// Heading from absolute device orientation
///
/// Requires the sample's `absolute` flag: relative-only orientation is
/// referenced to an arbitrary starting pose and cannot yield a true heading.
/// The alpha angle is passed through [`tilt::compensate`] so upright postures
/// read correctly; `threshold` is the posture boundary in degrees.
///
/// # Example
/// ```
/// use compass_heading::{OrientationSample, sources};
///
/// let sample = OrientationSample {
///     alpha: Some(120.0),
///     absolute: true,
///     ..Default::default()
/// };
/// assert_eq!(sources::absolute_heading(&sample, 45.0), Some(120.0));
///
/// // Relative-only orientation is rejected
/// let relative = OrientationSample {
///     alpha: Some(120.0),
///     ..Default::default()
/// };
/// assert_eq!(sources::absolute_heading(&relative, 45.0), None);
/// ```
pub fn absolute_heading(sample: &OrientationSample, threshold: f32) -> Option<f32> {
    if !sample.absolute {
        return None;
    }

    let alpha = sample.alpha.filter(|alpha| alpha.is_finite())?;

    Some(tilt::compensate(alpha, sample.beta, sample.gamma, threshold))
}

/// Heading from a raw magnetometer field vector
///
/// Uses the horizontal X/Y components; Z is carried by the sample stream but
/// does not enter the heading. The atan2 angle is in math convention
/// (0° = East, counterclockwise) and is converted to compass convention
/// (0° = North, clockwise) by `normalize(90 − angle)`.
///
/// A zero horizontal field has no direction, and non-finite components carry
/// no information; both produce no estimate.
///
/// # Example
/// ```
/// use compass_heading::sources;
/// use nalgebra::Vector3;
///
/// // Field pointing along +X reads as East
/// assert_eq!(
///     sources::magnetometer_heading(Vector3::new(1.0, 0.0, 0.0)),
///     Some(90.0)
/// );
/// ```
pub fn magnetometer_heading(magnetometer: Vector3<f32>) -> Option<f32> {
    let x = magnetometer.x;
    let y = magnetometer.y;

    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if x == 0.0 && y == 0.0 {
        return None;
    }

    let raw = y.atan2(x) * RAD_TO_DEG;

    Some(normalize_degrees(90.0 - raw))
}
