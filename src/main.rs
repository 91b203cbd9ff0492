use gaze_control::config::Config;
use gaze_control::logging::{init_tracing, LogConfig};
use gaze_control::pipeline;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&LogConfig::from(&config));
    tracing::info!("Starting gaze-control");

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(8);
    tokio::spawn(shutdown_signal(shutdown_tx));

    match pipeline::run(&config, shutdown_rx).await {
        Ok(summary) => {
            tracing::info!(
                frames = summary.stats.frames,
                selections = summary.stats.selections,
                "Shutdown complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Gaze pipeline failed");
            std::process::exit(1);
        }
    }
}

async fn shutdown_signal(shutdown_tx: broadcast::Sender<()>) {
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler, listening for Ctrl-C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received");
    let _ = shutdown_tx.send(());
}
