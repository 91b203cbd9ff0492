//! Gaze-to-control core
//!
//! Turns per-frame facial landmarks into an axis-locked on-screen pointer and a
//! blink-confirmed selection over four fixed directional targets. Everything in
//! this crate is pure computation over the current frame plus a few plain values
//! carried between frames; capture, landmark detection and rendering belong to
//! the host.
//!
//! ## Modules
//! - `landmarks`: landmark points, frames and the eye landmark role table
//! - `eye_metrics`: eyelid aperture and pupil offset per eye
//! - `blink`: aperture thresholding
//! - `gaze`: dominant-axis direction decision and cursor step
//! - `cursor`: axis-locked, clamped pointer position
//! - `targets`: the four fixed hit regions
//! - `selection`: blink confirmation state machine
//! - `frame_rate`: instantaneous frame rate with first-frame guard
//! - `controller`: per-frame pipeline tying the above together
//! - `wasm` (feature `wasm`): browser bindings

pub mod blink;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod eye_metrics;
pub mod frame_rate;
pub mod gaze;
pub mod landmarks;
pub mod selection;
pub mod targets;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use blink::BlinkDetector;
pub use config::GazeConfig;
pub use controller::{ControllerSnapshot, FrameOutput, GazeController};
pub use cursor::{CursorPosition, CursorState, ScreenGeometry};
pub use error::{ConfigError, FrameSkip, LayoutError};
pub use eye_metrics::{EyePair, EyeSample};
pub use frame_rate::FrameRateEstimator;
pub use gaze::{GazeDecision, GazeDirection, GazeMapper};
pub use landmarks::{EyeLandmarks, EyeLayout, EyeLayoutPreset, LandmarkFrame, LandmarkPoint};
pub use selection::{SelectionController, SelectionDisplay, SelectionState};
pub use targets::{TargetId, TargetLayout, TargetRegion, TargetRegistry};
