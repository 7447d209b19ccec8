//! Angle math utilities for the compass-heading library

/// Mathematical constants
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Normalize an angle in degrees to the canonical [0, 360) range
///
/// Computed as `((angle % 360) + 360) % 360`, which maps any finite input
/// (including negatives) onto [0, 360). The function is idempotent: applying
/// it to an already-normalized angle returns the angle unchanged.
///
/// Callers must not pass non-finite values; NaN and infinities have no
/// meaningful heading and are filtered out before angles reach this point.
///
/// # Example
/// ```
/// use compass_heading::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
pub fn normalize_degrees(angle: f32) -> f32 {
    ((angle % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_range() {
        let inputs = [
            -720.0, -540.0, -360.0, -180.0, -90.0, -0.5, 0.0, 45.0, 180.0, 359.5, 360.0, 540.0,
            1080.0,
        ];

        for &angle in &inputs {
            let normalized = normalize_degrees(angle);
            assert!(
                (0.0..360.0).contains(&normalized),
                "normalize_degrees({}) = {} is outside [0, 360)",
                angle,
                normalized
            );
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [-1000.0, -359.9, -1.0, 0.0, 1.0, 90.0, 359.9, 360.0, 725.0];

        for &angle in &inputs {
            let once = normalize_degrees(angle);
            let twice = normalize_degrees(once);
            assert_eq!(
                once, twice,
                "normalize_degrees is not idempotent for input {}",
                angle
            );
        }
    }

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(720.5), 0.5);
    }

    #[test]
    fn test_degree_radian_constants() {
        assert!((DEG_TO_RAD * RAD_TO_DEG - 1.0).abs() < 1e-6);
        assert!((180.0 * DEG_TO_RAD - std::f32::consts::PI).abs() < 1e-6);
    }
}
