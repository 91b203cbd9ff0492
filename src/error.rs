use gaze_core::{ConfigError, LayoutError};

/// Failures that stop the runtime. Per-frame problems never end up here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid gaze config: {0}")]
    Config(#[from] ConfigError),
    #[error("landmark source mismatch: {0}")]
    Layout(#[from] LayoutError),
    #[error("frame handoff closed: {0}")]
    ChannelClosed(&'static str),
    #[error("frame reader task failed: {0}")]
    Reader(#[from] tokio::task::JoinError),
}
