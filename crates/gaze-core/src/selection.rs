//! Selection confirmation state machine
//!
//! Idle -> JustSelected(since) on a blink while the cursor is inside a target.
//! JustSelected(since) -> PersistentlySelected once more than the selection
//! window has passed. A new blink over a target restarts JustSelected from any
//! state. Nothing ever returns to Idle.

use serde::Serialize;

use crate::targets::TargetId;

/// Default time a fresh selection shows the large banner, in seconds.
pub const DEFAULT_SELECTION_WINDOW_SECS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionState {
    #[default]
    Idle,
    JustSelected { since: f64, target: TargetId },
    PersistentlySelected { target: TargetId },
}

impl SelectionState {
    pub fn target(&self) -> Option<TargetId> {
        match self {
            Self::Idle => None,
            Self::JustSelected { target, .. } | Self::PersistentlySelected { target } => {
                Some(*target)
            }
        }
    }

    pub fn display(&self) -> SelectionDisplay {
        match self {
            Self::Idle => SelectionDisplay::Hidden,
            Self::JustSelected { .. } => SelectionDisplay::Banner,
            Self::PersistentlySelected { .. } => SelectionDisplay::CornerIndicator,
        }
    }
}

/// What the presentation layer should show for the current selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionDisplay {
    Hidden,
    /// Large centred confirmation.
    Banner,
    /// Small persistent corner indicator.
    CornerIndicator,
}

impl SelectionDisplay {
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::Hidden => None,
            Self::Banner => Some("SELECTED"),
            Self::CornerIndicator => Some("MODE: SELECTED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    state: SelectionState,
    window_secs: f64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_WINDOW_SECS)
    }
}

impl SelectionController {
    pub fn new(window_secs: f64) -> Self {
        Self {
            state: SelectionState::Idle,
            window_secs,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn display(&self) -> SelectionDisplay {
        self.state.display()
    }

    /// Feeds one frame's blink and hit-test result.
    ///
    /// `hit` comes from the cursor position held when the frame arrived.
    pub fn update(&mut self, blink: bool, hit: Option<TargetId>, now: f64) -> SelectionState {
        match (blink, hit) {
            (true, Some(target)) => {
                self.state = SelectionState::JustSelected { since: now, target };
            }
            _ => {
                self.tick(now);
            }
        }
        self.state
    }

    /// Applies only the time-driven transition.
    pub fn tick(&mut self, now: f64) -> SelectionState {
        if let SelectionState::JustSelected { since, target } = self.state {
            if now - since > self.window_secs {
                self.state = SelectionState::PersistentlySelected { target };
            }
        }
        self.state
    }
}
