// Server loop module
// Accepts connections until an interrupt stops the server

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until the shutdown signal fires.
///
/// The listener is owned by this loop for its whole lifetime; dropping
/// it on return releases the port. In-flight connections are request
/// scoped and finish with the process.
pub async fn run_until_shutdown(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    let in_flight = active_connections.load(Ordering::SeqCst);
    if in_flight > 0 {
        logger::log_warning(&format!("Exiting with {in_flight} connection(s) in flight"));
    }

    Ok(())
}
