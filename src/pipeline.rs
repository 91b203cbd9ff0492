//! Frame loop: a reader task feeds frame records through the handoff, the
//! processing loop runs them through the gaze session one at a time and
//! writes every output. Stops at end of input or on shutdown.

use std::sync::atomic::Ordering;

use gaze_core::GazeConfig;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::config::Config;
use crate::error::AppError;
use crate::handoff::{self, HandoffMode};
use crate::session::{GazeSession, SessionSummary};
use crate::sink::FrameSink;
use crate::source::FrameSource;

pub async fn run(
    config: &Config,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<SessionSummary, AppError> {
    let gaze = config.gaze_config()?;
    let source = FrameSource::open(&config.io.input_path).await?;
    let sink = FrameSink::create(&config.io.output_path).await?;
    tracing::info!(
        input = %config.io.input_path,
        output = %config.io.output_path,
        handoff = config.io.handoff.as_str(),
        "Frame pipeline starting"
    );
    run_with(
        &gaze,
        config.io.landmark_count,
        config.io.handoff,
        source,
        sink,
        shutdown_rx,
    )
    .await
}

pub async fn run_with(
    gaze: &GazeConfig,
    landmark_count: Option<usize>,
    mode: HandoffMode,
    mut source: FrameSource,
    mut sink: FrameSink,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<SessionSummary, AppError> {
    let mut session = GazeSession::new(gaze)?;
    if let Some(count) = landmark_count {
        session.check_landmark_source(count)?;
    }

    let malformed = source.malformed_counter();
    let (tx, mut rx) = handoff::channel(mode);

    let reader = tokio::spawn(async move {
        while let Some(frame) = source.next_frame().await? {
            tx.send(frame).await?;
        }
        Ok::<(), AppError>(())
    });

    let mut shutdown_open = true;
    let mut interrupted = false;
    loop {
        tokio::select! {
            biased;
            signal = shutdown_rx.recv(), if shutdown_open => match signal {
                Err(RecvError::Closed) => shutdown_open = false,
                _ => {
                    tracing::info!("Shutdown requested, stopping frame loop");
                    interrupted = true;
                    break;
                }
            },
            frame = rx.recv() => match frame {
                Some(frame) => {
                    let output = session.process(&frame);
                    sink.write(&output).await?;
                }
                None => break,
            },
        }
    }

    sink.flush().await?;
    tracing::debug!(lines = sink.written(), "Frame output flushed");

    if interrupted {
        reader.abort();
    } else {
        reader.await??;
    }

    Ok(session.finish(malformed.load(Ordering::Relaxed)))
}
