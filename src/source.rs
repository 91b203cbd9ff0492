//! JSON-lines landmark frame source
//!
//! One record per line: `{"timestamp": 0.033, "faces": [[[x, y], ...], ...]}`.
//! `faces` may be empty or absent when nothing was detected. Lines that do not
//! parse are logged and skipped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gaze_core::LandmarkFrame;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Monotonic capture time in seconds.
    pub timestamp: f64,
    #[serde(default)]
    pub faces: Vec<Vec<[f64; 2]>>,
}

impl FrameRecord {
    pub fn new(timestamp: f64, faces: Vec<Vec<[f64; 2]>>) -> Self {
        Self { timestamp, faces }
    }

    pub fn empty(timestamp: f64) -> Self {
        Self::new(timestamp, Vec::new())
    }

    /// Landmarks of the first face; any further faces are ignored.
    pub fn first_face(&self) -> Option<LandmarkFrame> {
        self.faces
            .first()
            .filter(|face| !face.is_empty())
            .map(|face| LandmarkFrame::from_pairs(face.iter().copied()))
    }
}

type BoxedReader = Box<dyn AsyncRead + Unpin + Send>;

pub struct FrameSource {
    lines: Lines<BufReader<BoxedReader>>,
    line_no: u64,
    malformed: Arc<AtomicU64>,
}

impl FrameSource {
    /// Opens `path`, or stdin for `-`.
    pub async fn open(path: &str) -> Result<Self, AppError> {
        let reader: BoxedReader = if path == "-" {
            Box::new(tokio::io::stdin())
        } else {
            Box::new(tokio::fs::File::open(path).await?)
        };
        Ok(Self::from_reader(reader))
    }

    pub fn from_reader(reader: BoxedReader) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line_no: 0,
            malformed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shared counter of skipped lines; stays readable after the source is moved into a task.
    pub fn malformed_counter(&self) -> Arc<AtomicU64> {
        self.malformed.clone()
    }

    pub fn malformed_lines(&self) -> u64 {
        self.malformed.load(Ordering::Relaxed)
    }

    /// Next well-formed record, or `None` at end of input.
    pub async fn next_frame(&mut self) -> Result<Option<FrameRecord>, AppError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<FrameRecord>(line) {
                Ok(record) => return Ok(Some(record)),
                Err(e) => {
                    self.malformed.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(line = self.line_no, error = %e, "Skipping malformed frame record");
                }
            }
        }
        Ok(None)
    }
}
