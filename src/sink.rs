use gaze_core::FrameOutput;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::error::AppError;

type BoxedWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// Writes one JSON object per processed frame.
pub struct FrameSink {
    writer: BufWriter<BoxedWriter>,
    written: u64,
}

impl FrameSink {
    /// Creates (truncating) `path`, or writes to stdout for `-`.
    pub async fn create(path: &str) -> Result<Self, AppError> {
        let writer: BoxedWriter = if path == "-" {
            Box::new(tokio::io::stdout())
        } else {
            Box::new(tokio::fs::File::create(path).await?)
        };
        Ok(Self::from_writer(writer))
    }

    pub fn from_writer(writer: BoxedWriter) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub async fn write(&mut self, output: &FrameOutput) -> Result<(), AppError> {
        let mut line = serde_json::to_vec(output)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.written += 1;
        Ok(())
    }

    pub async fn flush(&mut self) -> Result<(), AppError> {
        self.writer.flush().await?;
        Ok(())
    }
}
