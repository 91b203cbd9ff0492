use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use gaze_core::{EyeLayoutPreset, GazeConfig, ScreenGeometry};

use crate::error::AppError;
use crate::handoff::HandoffMode;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub io: IoConfig,
    pub gaze: GazeEnvConfig,
}

#[derive(Debug, Clone)]
pub struct IoConfig {
    /// `-` reads frames from stdin.
    pub input_path: String,
    /// `-` writes frame outputs to stdout.
    pub output_path: String,
    pub handoff: HandoffMode,
    /// Landmarks per face the detector promises; checked against the eye layout at startup.
    pub landmark_count: Option<usize>,
}

/// Gaze settings as read from the environment; see [`Config::gaze_config`].
#[derive(Debug, Clone)]
pub struct GazeEnvConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub blink_threshold: f64,
    pub cursor_step: i32,
    pub dead_zone: f64,
    pub selection_window_secs: f64,
    pub eye_layout: EyeLayoutPreset,
    /// JSON `GazeConfig` that replaces all of the above when set.
    pub config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = GazeConfig::default();
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            io: IoConfig {
                input_path: env_or("INPUT_PATH", "-"),
                output_path: env_or("OUTPUT_PATH", "-"),
                handoff: env_or_parse("FRAME_HANDOFF", HandoffMode::Ordered),
                landmark_count: env::var("LANDMARK_COUNT")
                    .ok()
                    .and_then(|raw| match raw.trim().parse::<usize>() {
                        Ok(count) => Some(count),
                        Err(_) => {
                            tracing::warn!(value = %raw, "Ignoring unparsable LANDMARK_COUNT");
                            None
                        }
                    }),
            },
            gaze: GazeEnvConfig {
                screen_width: env_or_parse("SCREEN_WIDTH", defaults.screen.width),
                screen_height: env_or_parse("SCREEN_HEIGHT", defaults.screen.height),
                blink_threshold: env_or_parse("BLINK_THRESHOLD", defaults.blink_threshold),
                cursor_step: env_or_parse("CURSOR_STEP", defaults.cursor_step),
                dead_zone: env_or_parse("GAZE_DEAD_ZONE", defaults.dead_zone),
                selection_window_secs: env_or_parse(
                    "SELECTION_WINDOW_SECS",
                    defaults.selection_window_secs,
                ),
                eye_layout: env_or_parse("EYE_LAYOUT", defaults.layout),
                config_path: env::var("GAZE_CONFIG_PATH")
                    .ok()
                    .filter(|p| !p.trim().is_empty())
                    .map(PathBuf::from),
            },
        }
    }

    /// Resolves the gaze configuration, reading `GAZE_CONFIG_PATH` if set.
    pub fn gaze_config(&self) -> Result<GazeConfig, AppError> {
        let config = match &self.gaze.config_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let config: GazeConfig = serde_json::from_str(&raw)?;
                tracing::info!(path = %path.display(), "Loaded gaze config file");
                config
            }
            None => GazeConfig {
                screen: ScreenGeometry::new(self.gaze.screen_width, self.gaze.screen_height),
                blink_threshold: self.gaze.blink_threshold,
                cursor_step: self.gaze.cursor_step,
                dead_zone: self.gaze.dead_zone,
                selection_window_secs: self.gaze.selection_window_secs,
                layout: self.gaze.eye_layout,
                ..GazeConfig::default()
            },
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}
