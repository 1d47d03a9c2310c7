//! Quit on SIGINT/SIGTERM (Ctrl+C outside unix)
//!
//! Raw mode swallows Ctrl+C as a key press, so this only fires for signals
//! sent from outside, e.g. `kill` or a closing terminal emulator.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use opmanual_core::prelude::*;

/// Post `Message::Quit` on `tx` once a shutdown signal arrives
///
/// The listener lives until a signal arrives or the returned handle is
/// aborted, so callers abort it when their event loop ends.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let name = match shutdown_signal().await {
            Ok(name) => name,
            Err(e) => {
                error!("Signal listener unavailable: {}", e);
                return;
            }
        };

        info!("{} received, quitting", name);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Event loop already closed, dropping {}", name);
        }
    })
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt()).context("Installing SIGINT listener")?;
    let mut terminate = signal(SignalKind::terminate()).context("Installing SIGTERM listener")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .context("Installing Ctrl+C listener")?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        handle.abort();
    }

    #[tokio::test]
    async fn test_abort_stops_listener_and_releases_sender() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        handle.abort();

        let joined = handle.await;
        assert!(joined.unwrap_err().is_cancelled());
        // The aborted task dropped its sender, closing the channel
        assert_eq!(rx.recv().await, None);
    }
}
