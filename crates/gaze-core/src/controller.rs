//! Per-frame gaze controller
//!
//! One `process` call consumes one frame: frame-rate tick, eye extraction,
//! blink and gaze decisions, hit test against the cursor position held at the
//! start of the frame, selection update, then the cursor update. A blink is
//! confirmed where the cursor rested, not where this frame's noisy eye
//! metrics push it. Frames without a
//! usable face are timed and advance the selection timer but leave cursor and
//! selection otherwise untouched.

use serde::Serialize;

use crate::blink::BlinkDetector;
use crate::config::GazeConfig;
use crate::cursor::{CursorPosition, CursorState};
use crate::error::{ConfigError, FrameSkip};
use crate::eye_metrics::{self, EyePair};
use crate::frame_rate::FrameRateEstimator;
use crate::gaze::{GazeDecision, GazeMapper};
use crate::landmarks::{EyeLayout, LandmarkFrame};
use crate::selection::{SelectionController, SelectionDisplay, SelectionState};
use crate::targets::{TargetId, TargetRegistry};

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub timestamp: f64,
    pub cursor: CursorPosition,
    pub selection: SelectionState,
    pub display: SelectionDisplay,
    pub horizontal_label: Option<&'static str>,
    pub vertical_label: Option<&'static str>,
    pub blink: bool,
    pub hit: Option<TargetId>,
    pub fps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<FrameSkip>,
    #[serde(skip)]
    pub eyes: Option<EyePair>,
    #[serde(skip)]
    pub decision: Option<GazeDecision>,
}

/// Plain copy of the state carried between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerSnapshot {
    pub cursor: CursorPosition,
    pub selection: SelectionState,
    pub previous_timestamp: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct GazeController {
    layout: EyeLayout,
    blink: BlinkDetector,
    mapper: GazeMapper,
    cursor: CursorState,
    targets: TargetRegistry,
    selection: SelectionController,
    frame_rate: FrameRateEstimator,
}

impl GazeController {
    pub fn new(config: &GazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            layout: config.eye_layout(),
            blink: BlinkDetector::new(config.blink_threshold),
            mapper: GazeMapper::new(config.cursor_step, config.dead_zone),
            cursor: CursorState::centered(config.screen),
            targets: TargetRegistry::for_screen(config.screen, config.targets),
            selection: SelectionController::new(config.selection_window_secs),
            frame_rate: FrameRateEstimator::new(),
        })
    }

    pub fn layout(&self) -> &EyeLayout {
        &self.layout
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            cursor: self.cursor.position(),
            selection: self.selection.state(),
            previous_timestamp: self.frame_rate.previous(),
        }
    }

    /// Processes one frame. `frame` is `None` when no face was detected.
    pub fn process(&mut self, frame: Option<&LandmarkFrame>, timestamp: f64) -> FrameOutput {
        let fps = self.frame_rate.tick(timestamp);

        let eyes = match frame {
            Some(frame) => eye_metrics::extract(frame, &self.layout),
            None => Err(FrameSkip::NoFaceDetected),
        };

        let eyes = match eyes {
            Ok(eyes) => eyes,
            Err(skip) => {
                let selection = self.selection.tick(timestamp);
                return FrameOutput {
                    timestamp,
                    cursor: self.cursor.position(),
                    selection,
                    display: selection.display(),
                    horizontal_label: None,
                    vertical_label: None,
                    blink: false,
                    hit: None,
                    fps,
                    skip: Some(skip),
                    eyes: None,
                    decision: None,
                };
            }
        };

        let blink = self.blink.is_blink(&eyes);
        let decision = self.mapper.map(&eyes);
        let hit = self.targets.hit_test(self.cursor.position());
        let selection = self.selection.update(blink, hit, timestamp);
        let cursor = self.cursor.apply_delta(decision.dx, decision.dy);

        FrameOutput {
            timestamp,
            cursor,
            selection,
            display: selection.display(),
            horizontal_label: Some(decision.horizontal.label()),
            vertical_label: Some(decision.vertical.label()),
            blink,
            hit,
            fps,
            skip: None,
            eyes: Some(eyes),
            decision: Some(decision),
        }
    }
}
