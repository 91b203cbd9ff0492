//! Single-producer/single-consumer frame handoff between the reader task and
//! the processing loop.
//!
//! `Ordered` applies backpressure and never drops a frame. `LatestWins` lets a
//! slow consumer skip straight to the newest frame; order is still preserved
//! because only the most recent value is ever observed.

use std::str::FromStr;

use tokio::sync::{mpsc, watch};

use crate::error::AppError;
use crate::source::FrameRecord;

/// One frame in flight at a time.
const ORDERED_CAPACITY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffMode {
    Ordered,
    LatestWins,
}

impl HandoffMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ordered => "ordered",
            Self::LatestWins => "latest",
        }
    }
}

impl FromStr for HandoffMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordered" => Ok(Self::Ordered),
            "latest" | "latest-wins" => Ok(Self::LatestWins),
            other => Err(format!("unknown frame handoff '{other}'")),
        }
    }
}

pub enum FrameSender {
    Ordered(mpsc::Sender<FrameRecord>),
    Latest(watch::Sender<Option<FrameRecord>>),
}

pub enum FrameReceiver {
    Ordered(mpsc::Receiver<FrameRecord>),
    Latest(watch::Receiver<Option<FrameRecord>>),
}

pub fn channel(mode: HandoffMode) -> (FrameSender, FrameReceiver) {
    match mode {
        HandoffMode::Ordered => {
            let (tx, rx) = mpsc::channel(ORDERED_CAPACITY);
            (FrameSender::Ordered(tx), FrameReceiver::Ordered(rx))
        }
        HandoffMode::LatestWins => {
            let (tx, rx) = watch::channel(None);
            (FrameSender::Latest(tx), FrameReceiver::Latest(rx))
        }
    }
}

impl FrameSender {
    pub async fn send(&self, frame: FrameRecord) -> Result<(), AppError> {
        match self {
            Self::Ordered(tx) => tx
                .send(frame)
                .await
                .map_err(|_| AppError::ChannelClosed("consumer dropped")),
            Self::Latest(tx) => tx
                .send(Some(frame))
                .map_err(|_| AppError::ChannelClosed("consumer dropped")),
        }
    }
}

impl FrameReceiver {
    /// Next frame, or `None` once the producer is gone and everything was consumed.
    pub async fn recv(&mut self) -> Option<FrameRecord> {
        match self {
            Self::Ordered(rx) => rx.recv().await,
            Self::Latest(rx) => loop {
                rx.changed().await.ok()?;
                if let Some(frame) = rx.borrow_and_update().clone() {
                    return Some(frame);
                }
            },
        }
    }
}
