//! Circular-mean smoothing of compass headings

use std::collections::VecDeque;

use crate::math::{DEG_TO_RAD, RAD_TO_DEG, normalize_degrees};
use crate::types::DEFAULT_SMOOTHING_WINDOW;

/// Sliding-window heading smoother
///
/// Keeps the most recent heading estimates in a fixed-capacity FIFO and
/// exposes their circular mean. Headings are averaged as unit vectors
/// (sin/cos sums) rather than as plain numbers: the arithmetic mean of 359°
/// and 1° is 180°, the circular mean is the 0° a compass needle expects.
///
/// # Example
/// ```
/// use compass_heading::CircularSmoother;
///
/// let mut smoother = CircularSmoother::new(5);
/// smoother.push(359.0);
/// let heading = smoother.push(1.0);
///
/// // Mean straddles North instead of flipping South
/// assert!(heading < 0.5 || heading > 359.5);
/// ```
#[derive(Debug, Clone)]
pub struct CircularSmoother {
    /// Most recent estimates, oldest first
    window: VecDeque<f32>,
    /// Maximum number of estimates kept
    capacity: usize,
    /// Circular mean of the window, 0 when empty
    smoothed: f32,
}

impl CircularSmoother {
    /// Create a smoother holding up to `capacity` estimates
    ///
    /// A capacity below 1 is treated as 1 (a window must hold at least the
    /// latest estimate).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            smoothed: 0.0,
        }
    }

    /// Push a heading estimate and return the updated smoothed heading
    ///
    /// The estimate is normalized to [0, 360) and appended; if the window is
    /// full the oldest entry is evicted first (strict sliding window). The
    /// circular mean of the window is recomputed on every push.
    ///
    /// Non-finite estimates are ignored and leave the window untouched; the
    /// previous smoothed heading is returned.
    ///
    /// # Arguments
    /// * `estimate` - Heading estimate in degrees
    ///
    /// # Returns
    /// Smoothed heading in degrees, [0, 360)
    pub fn push(&mut self, estimate: f32) -> f32 {
        if !estimate.is_finite() {
            return self.smoothed;
        }

        self.window.push_back(normalize_degrees(estimate));
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }

        self.recompute();
        self.smoothed
    }

    /// Current smoothed heading in degrees, [0, 360); 0 while the window is empty
    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }

    /// Number of estimates currently held
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window holds no estimates yet
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Maximum number of estimates kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the window capacity, evicting oldest entries if it shrinks
    ///
    /// The smoothed heading is recomputed over the surviving entries.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }

        self.recompute();
    }

    /// Drop all estimates and return the smoothed heading to its default 0
    pub fn clear(&mut self) {
        self.window.clear();
        self.smoothed = 0.0;
    }

    /// Recompute the circular mean over the current window
    fn recompute(&mut self) {
        match self.window.len() {
            0 => self.smoothed = 0.0,
            // A single entry is its own mean; skip the trig round trip
            1 => self.smoothed = self.window[0],
            n => {
                let mut sum_sin = 0.0f32;
                let mut sum_cos = 0.0f32;

                for &heading in &self.window {
                    let radians = heading * DEG_TO_RAD;
                    sum_sin += radians.sin();
                    sum_cos += radians.cos();
                }

                let count = n as f32;
                let mean = (sum_sin / count).atan2(sum_cos / count) * RAD_TO_DEG;
                self.smoothed = normalize_degrees(mean);
            }
        }
    }
}

impl Default for CircularSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_window_defaults_to_zero() {
        let smoother = CircularSmoother::new(5);

        assert_eq!(smoother.smoothed(), 0.0);
        assert_eq!(smoother.len(), 0);
        assert!(smoother.is_empty());
        assert_eq!(smoother.capacity(), 5);
    }

    #[test]
    fn test_single_estimate_is_its_own_mean() {
        let mut smoother = CircularSmoother::default();

        assert_eq!(smoother.push(90.0), 90.0);
        assert_eq!(smoother.smoothed(), 90.0);
        assert_eq!(smoother.len(), 1);
    }

    #[test]
    fn test_mean_across_wraparound() {
        let mut smoother = CircularSmoother::new(5);
        smoother.push(359.0);
        let heading = smoother.push(1.0);

        assert!(
            heading < 0.5 || heading > 359.5,
            "mean of 359° and 1° should straddle 0°, got {}",
            heading
        );
        assert!(
            (heading - 180.0).abs() > 90.0,
            "mean of 359° and 1° must not collapse to 180°, got {}",
            heading
        );
    }

    #[test]
    fn test_window_eviction_keeps_newest() {
        let mut smoother = CircularSmoother::new(3);
        smoother.push(10.0);
        smoother.push(20.0);
        let full = smoother.push(30.0);

        assert_eq!(smoother.len(), 3);
        assert_relative_eq!(full, 20.0, epsilon = 1e-3);

        // Fourth estimate evicts the 10° entry
        let evicted = smoother.push(40.0);
        assert_eq!(smoother.len(), 3);
        assert_relative_eq!(evicted, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_capacity_clamps_to_one() {
        let mut smoother = CircularSmoother::new(0);
        assert_eq!(smoother.capacity(), 1);

        smoother.push(120.0);
        assert_eq!(smoother.push(240.0), 240.0);
        assert_eq!(smoother.len(), 1);
    }

    #[test]
    fn test_shrinking_capacity_evicts_oldest() {
        let mut smoother = CircularSmoother::new(5);
        smoother.push(0.0);
        smoother.push(90.0);
        smoother.push(180.0);

        smoother.set_capacity(2);

        assert_eq!(smoother.len(), 2);
        assert_eq!(smoother.capacity(), 2);
        // Survivors are 90° and 180°
        assert_relative_eq!(smoother.smoothed(), 135.0, epsilon = 1e-3);
    }

    #[test]
    fn test_clear_returns_to_default() {
        let mut smoother = CircularSmoother::new(5);
        smoother.push(10.0);
        smoother.push(350.0);

        smoother.clear();

        assert!(smoother.is_empty());
        assert_eq!(smoother.smoothed(), 0.0);
    }

    #[test]
    fn test_non_finite_estimates_are_ignored() {
        let mut smoother = CircularSmoother::new(5);
        let before = smoother.push(90.0);

        assert_eq!(smoother.push(f32::NAN), before);
        assert_eq!(smoother.push(f32::INFINITY), before);
        assert_eq!(smoother.push(f32::NEG_INFINITY), before);
        assert_eq!(smoother.len(), 1);
    }

    #[test]
    fn test_negative_estimates_are_normalized() {
        let mut smoother = CircularSmoother::new(5);

        assert_eq!(smoother.push(-90.0), 270.0);
    }

    #[test]
    fn test_mean_of_neighboring_headings() {
        let mut smoother = CircularSmoother::new(5);
        smoother.push(88.0);
        smoother.push(90.0);
        let heading = smoother.push(92.0);

        assert_relative_eq!(heading, 90.0, epsilon = 1e-3);
    }
}
