use serde::{Deserialize, Serialize};

use crate::blink::DEFAULT_BLINK_THRESHOLD;
use crate::cursor::ScreenGeometry;
use crate::error::ConfigError;
use crate::gaze::DEFAULT_CURSOR_STEP;
use crate::landmarks::{EyeLayout, EyeLayoutPreset};
use crate::selection::DEFAULT_SELECTION_WINDOW_SECS;
use crate::targets::TargetLayout;

const MAX_SCREEN_SIDE: u32 = 1 << 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GazeConfig {
    pub screen: ScreenGeometry,
    /// Eyelid aperture below which an eye counts as closed (normalized units).
    pub blink_threshold: f64,
    /// Pixels moved per frame on each active axis.
    pub cursor_step: i32,
    /// Offsets at or below this magnitude read as looking straight ahead.
    #[serde(default)]
    pub dead_zone: f64,
    pub selection_window_secs: f64,
    #[serde(default)]
    pub targets: TargetLayout,
    #[serde(default)]
    pub layout: EyeLayoutPreset,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            screen: ScreenGeometry::default(),
            blink_threshold: DEFAULT_BLINK_THRESHOLD,
            cursor_step: DEFAULT_CURSOR_STEP,
            dead_zone: 0.0,
            selection_window_secs: DEFAULT_SELECTION_WINDOW_SECS,
            targets: TargetLayout::default(),
            layout: EyeLayoutPreset::default(),
        }
    }
}

impl GazeConfig {
    pub fn eye_layout(&self) -> EyeLayout {
        self.layout.layout()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Screen coordinates are i32 internally.
        let valid_side = |side: u32| side > 0 && side <= MAX_SCREEN_SIDE;
        if !valid_side(self.screen.width) || !valid_side(self.screen.height) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen.width,
                height: self.screen.height,
            });
        }
        check_non_negative("blink_threshold", self.blink_threshold)?;
        check_non_negative("dead_zone", self.dead_zone)?;
        if self.cursor_step <= 0 {
            return Err(ConfigError::ZeroStep);
        }
        if !self.selection_window_secs.is_finite() || self.selection_window_secs <= 0.0 {
            return Err(ConfigError::InvalidWindow(self.selection_window_secs));
        }
        if !self.targets.fits(&self.screen) {
            return Err(ConfigError::TargetsOutOfScreen {
                width: self.targets.width,
                height: self.targets.height,
                screen_width: self.screen.width,
                screen_height: self.screen.height,
            });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidThreshold { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GazeConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = GazeConfig {
            screen: ScreenGeometry::new(0, 480),
            ..GazeConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidScreen { .. })));

        let cfg = GazeConfig {
            blink_threshold: f64::NAN,
            ..GazeConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidThreshold {
                field: "blink_threshold",
                ..
            })
        ));

        let cfg = GazeConfig {
            cursor_step: 0,
            ..GazeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStep));

        let cfg = GazeConfig {
            selection_window_secs: 0.0,
            ..GazeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidWindow(0.0)));

        let cfg = GazeConfig {
            screen: ScreenGeometry::new(100, 480),
            ..GazeConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::TargetsOutOfScreen { .. })));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{
            "screen": { "width": 800, "height": 600 },
            "blinkThreshold": 0.012,
            "cursorStep": 4,
            "selectionWindowSecs": 1.5,
            "layout": "basic"
        }"#;
        let cfg: GazeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.screen, ScreenGeometry::new(800, 600));
        assert_eq!(cfg.cursor_step, 4);
        assert_eq!(cfg.dead_zone, 0.0);
        assert_eq!(cfg.targets, TargetLayout::default());
        assert_eq!(cfg.layout, EyeLayoutPreset::Basic);
        assert!(cfg.validate().is_ok());
    }
}
