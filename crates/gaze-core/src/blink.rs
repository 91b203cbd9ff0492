//! Blink detection
//!
//! A frame counts as a blink when either eye's aperture falls below a fixed
//! threshold. The threshold is an empirical constant in normalized image
//! units, not derived from a per-user baseline. There is no hysteresis here;
//! repeated confirmations are absorbed by the selection window.

use crate::eye_metrics::EyePair;

/// Default aperture below which an eye counts as closed.
pub const DEFAULT_BLINK_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkDetector {
    threshold: f64,
}

impl Default for BlinkDetector {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_THRESHOLD)
    }
}

impl BlinkDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Valid for the current frame only.
    pub fn is_blink(&self, eyes: &EyePair) -> bool {
        eyes.left.aperture < self.threshold || eyes.right.aperture < self.threshold
    }
}
