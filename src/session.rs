//! Gaze session: drives the core controller one frame record at a time and
//! keeps the session-level bookkeeping the core has no business holding.

use chrono::{DateTime, Utc};
use gaze_core::{
    ConfigError, ControllerSnapshot, FrameOutput, FrameSkip, GazeConfig, GazeController,
    LayoutError, SelectionState,
};
use serde::Serialize;

use crate::source::FrameRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub frames: u64,
    pub face_frames: u64,
    pub skipped_frames: u64,
    pub blinks: u64,
    pub selections: u64,
    pub malformed_lines: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub stats: SessionStats,
    pub final_state: ControllerSnapshot,
}

pub struct GazeSession {
    controller: GazeController,
    stats: SessionStats,
    started_at: DateTime<Utc>,
    face_present: Option<bool>,
    last_timestamp: Option<f64>,
    last_selection: SelectionState,
}

impl GazeSession {
    pub fn new(config: &GazeConfig) -> Result<Self, ConfigError> {
        let controller = GazeController::new(config)?;
        tracing::info!(
            width = config.screen.width,
            height = config.screen.height,
            layout = config.layout.as_str(),
            required_landmarks = controller.layout().required_landmarks(),
            "Gaze session ready"
        );
        Ok(Self {
            controller,
            stats: SessionStats::default(),
            started_at: Utc::now(),
            face_present: None,
            last_timestamp: None,
            last_selection: SelectionState::Idle,
        })
    }

    /// Checks the configured eye layout against the detector's landmark count.
    pub fn check_landmark_source(&self, landmark_count: usize) -> Result<(), LayoutError> {
        self.controller.layout().validate(landmark_count)
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.controller.snapshot()
    }

    pub fn process(&mut self, record: &FrameRecord) -> FrameOutput {
        if let Some(prev) = self.last_timestamp {
            if record.timestamp <= prev {
                tracing::warn!(
                    previous = prev,
                    timestamp = record.timestamp,
                    "Non-increasing frame timestamp"
                );
            }
        }
        self.last_timestamp = Some(record.timestamp);

        if record.faces.len() > 1 {
            tracing::debug!(faces = record.faces.len(), "Multiple faces, using the first");
        }

        let face = record.first_face();
        let output = self.controller.process(face.as_ref(), record.timestamp);
        self.record(&output);
        output
    }

    pub fn finish(&self, malformed_lines: u64) -> SessionSummary {
        let stats = SessionStats {
            malformed_lines,
            ..self.stats
        };
        let summary = SessionSummary {
            started_at: self.started_at,
            finished_at: Utc::now(),
            stats,
            final_state: self.controller.snapshot(),
        };
        tracing::info!(
            frames = stats.frames,
            face_frames = stats.face_frames,
            skipped = stats.skipped_frames,
            blinks = stats.blinks,
            selections = stats.selections,
            malformed = stats.malformed_lines,
            cursor_x = summary.final_state.cursor.x,
            cursor_y = summary.final_state.cursor.y,
            "Gaze session finished"
        );
        summary
    }

    fn record(&mut self, output: &FrameOutput) {
        self.stats.frames += 1;

        let has_face = output.skip.is_none();
        if has_face {
            self.stats.face_frames += 1;
        } else {
            self.stats.skipped_frames += 1;
        }
        if output.blink {
            self.stats.blinks += 1;
        }

        if self.face_present != Some(has_face) {
            match output.skip {
                None => tracing::debug!(timestamp = output.timestamp, "Face acquired"),
                Some(FrameSkip::NoFaceDetected) => {
                    tracing::debug!(timestamp = output.timestamp, "Face lost")
                }
                Some(FrameSkip::InsufficientLandmarks { required, actual }) => tracing::debug!(
                    timestamp = output.timestamp,
                    required,
                    actual,
                    "Face has too few landmarks"
                ),
            }
            self.face_present = Some(has_face);
        }

        if output.selection != self.last_selection {
            match output.selection {
                // A held blink re-arms the same target every frame; count it once.
                SelectionState::JustSelected { target, .. }
                    if matches!(
                        self.last_selection,
                        SelectionState::JustSelected { target: prev, .. } if prev == target
                    ) =>
                {
                    tracing::trace!(command = target.label(), "Selection re-armed");
                }
                SelectionState::JustSelected { target, .. } => {
                    self.stats.selections += 1;
                    tracing::info!(
                        command = target.label(),
                        timestamp = output.timestamp,
                        "Target selected"
                    );
                }
                SelectionState::PersistentlySelected { target } => {
                    tracing::info!(command = target.label(), "Selection persisted");
                }
                SelectionState::Idle => {}
            }
            self.last_selection = output.selection;
        }
    }
}
