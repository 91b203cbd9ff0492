//! Gaze mapping
//!
//! Relative, velocity-like mapping: each frame moves the cursor one fixed step
//! per axis in the looked-at direction. There is no absolute gaze-to-screen
//! calibration, so motion accumulates across frames instead of snapping.
//!
//! Per axis, the eye with the larger offset magnitude decides the direction.
//! The two eyes may disagree; the axes are decided independently. Right-eye
//! offsets arrive mirrored (centre minus pupil), so the right eye reads its
//! sign the other way round: a negative right offset means left or up.

use serde::{Deserialize, Serialize};

use crate::eye_metrics::EyePair;

/// Default cursor step per frame, in screen pixels.
pub const DEFAULT_CURSOR_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GazeDirection {
    Left,
    Right,
    Up,
    Down,
    Center,
}

impl GazeDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Look Left",
            Self::Right => "Look Right",
            Self::Up => "Look Up",
            Self::Down => "Look Down",
            Self::Center => "Look Center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GazeDecision {
    /// `Left`, `Right` or `Center`.
    pub horizontal: GazeDirection,
    /// `Up`, `Down` or `Center`.
    pub vertical: GazeDirection,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeMapper {
    step: i32,
    dead_zone: f64,
}

impl Default for GazeMapper {
    fn default() -> Self {
        Self::new(DEFAULT_CURSOR_STEP, 0.0)
    }
}

impl GazeMapper {
    pub fn new(step: i32, dead_zone: f64) -> Self {
        Self {
            step: step.abs(),
            dead_zone: dead_zone.abs(),
        }
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn map(&self, eyes: &EyePair) -> GazeDecision {
        let offset_x = dominant(eyes.left.offset_x, eyes.right.offset_x);
        let offset_y = dominant(eyes.left.offset_y, eyes.right.offset_y);

        let horizontal = if offset_x.abs() <= self.dead_zone {
            GazeDirection::Center
        } else if offset_x > 0.0 {
            GazeDirection::Left
        } else {
            GazeDirection::Right
        };

        let vertical = if offset_y.abs() <= self.dead_zone {
            GazeDirection::Center
        } else if offset_y > 0.0 {
            GazeDirection::Up
        } else {
            GazeDirection::Down
        };

        // Screen y grows downwards.
        let dx = match horizontal {
            GazeDirection::Left => -self.step,
            GazeDirection::Right => self.step,
            _ => 0,
        };
        let dy = match vertical {
            GazeDirection::Up => -self.step,
            GazeDirection::Down => self.step,
            _ => 0,
        };

        GazeDecision {
            horizontal,
            vertical,
            dx,
            dy,
        }
    }
}

/// Offset of whichever eye moved further on this axis, in the left eye's sign;
/// ties go to the right eye.
fn dominant(left: f64, right: f64) -> f64 {
    if left.abs() > right.abs() {
        left
    } else {
        -right
    }
}
