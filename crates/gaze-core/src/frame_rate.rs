/// Instantaneous frame rate from consecutive timestamps (seconds).
///
/// The first frame, and any frame whose delta is zero, negative or not finite,
/// reports 0.0 instead of dividing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRateEstimator {
    previous: Option<f64>,
}

impl FrameRateEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    pub fn tick(&mut self, now: f64) -> f64 {
        let previous = self.previous.replace(now);
        match previous {
            Some(prev) => {
                let delta = now - prev;
                if delta.is_finite() && delta > 0.0 {
                    1.0 / delta
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }
}
