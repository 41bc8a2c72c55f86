// Signal handling module
//
// Supported signals:
// - SIGTERM: Clean shutdown
// - SIGINT:  Clean shutdown (Ctrl+C)
//
// The server keeps no persisted state, so shutdown is simply stopping
// the accept loop and exiting.

use std::sync::Arc;
use tokio::sync::Notify;

/// Start the signal handler (Unix)
///
/// Spawns a background task that waits for an interrupt and notifies
/// the accept loop to stop.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            shutdown.notify_waiters();
        }
    });
}
