use serde::{Deserialize, Serialize};

/// Rejected configuration. Raised once, when a controller is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("screen geometry must be non-zero and at most 2^30 per side, got {width}x{height}")]
    InvalidScreen { width: u32, height: u32 },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
    #[error("cursor_step must be > 0")]
    ZeroStep,
    #[error("selection_window_secs must be > 0, got {0}")]
    InvalidWindow(f64),
    #[error("target regions ({width}x{height}) do not fit a {screen_width}x{screen_height} screen")]
    TargetsOutOfScreen {
        width: u32,
        height: u32,
        screen_width: u32,
        screen_height: u32,
    },
}

/// The landmark source does not provide every id the eye layout reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("eye layout needs {required} landmarks, source provides {actual}")]
    InsufficientLandmarks { required: usize, actual: usize },
}

/// Why a frame produced no eye/blink/gaze update.
///
/// Not an error: the frame is still timed and the selection timer still runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum FrameSkip {
    NoFaceDetected,
    #[serde(rename_all = "camelCase")]
    InsufficientLandmarks { required: usize, actual: usize },
}
