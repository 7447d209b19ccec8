//! Tilt compensation for absolute orientation headings

use crate::math::{DEG_TO_RAD, RAD_TO_DEG, normalize_degrees};

/// Compute a tilt-compensated compass heading
///
/// When a device is held flat, the absolute `alpha` angle is already the
/// compass heading. Held upright, the screen axis the user sights along no
/// longer matches the device Z axis and `alpha` alone drifts; this function
/// derives the posture correction from `beta`/`gamma` and folds it into the
/// heading.
///
/// The correction is applied only when `|beta|` exceeds `threshold` degrees.
/// The threshold separates "flat on a table" from "held up to the eye"; it is
/// an empirical posture boundary, not physics, which is why it is a
/// parameter. Below the threshold, and whenever `beta` or `gamma` is missing
/// or non-finite, the heading is `alpha` itself (normalized).
///
/// # Arguments
/// * `alpha` - Absolute compass angle in degrees, 0 = North when flat; must be finite
/// * `beta` - Front-to-back tilt in degrees, if known
/// * `gamma` - Left-to-right tilt in degrees, if known
/// * `threshold` - Posture boundary in degrees, typically 45
///
/// # Returns
/// Heading in degrees, [0, 360)
///
/// # Example
/// ```
/// use compass_heading::tilt::compensate;
///
/// // Flat device: alpha passes through
/// assert_eq!(compensate(200.0, Some(10.0), Some(30.0), 45.0), 200.0);
///
/// // Upright device: correction applied
/// let heading = compensate(0.0, Some(90.0), Some(45.0), 45.0);
/// assert!((heading - 45.0).abs() < 0.01);
/// ```
pub fn compensate(alpha: f32, beta: Option<f32>, gamma: Option<f32>, threshold: f32) -> f32 {
    let (beta, gamma) = match (beta, gamma) {
        (Some(b), Some(g)) if b.is_finite() && g.is_finite() => (b, g),
        // Unknown posture: treat the device as flat
        _ => return normalize_degrees(alpha),
    };

    if beta.abs() <= threshold {
        return normalize_degrees(alpha);
    }

    let beta_rad = beta * DEG_TO_RAD;
    let gamma_rad = gamma * DEG_TO_RAD;

    // Angle of the sighting axis within the horizontal plane
    let tilt_angle = gamma_rad.sin().atan2(beta_rad.sin() * gamma_rad.cos()) * RAD_TO_DEG;

    normalize_degrees(alpha + tilt_angle)
}
