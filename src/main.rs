use clap::Parser;
use std::sync::Arc;
use tokio::sync::Notify;

use spa_server::config::{AppState, Config};
use spa_server::logger;
use spa_server::server;

/// Development server for single-page applications.
///
/// Serves the current directory and answers unmatched application
/// routes with index.html so client-side routing can be tested locally.
#[derive(Parser)]
#[command(name = "spa-server", version)]
struct Cli {
    /// TCP port to listen on
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    // Build the Tokio runtime, sizing the thread pool from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(serve(cfg))
}

async fn serve(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // A bound port is the one fatal startup condition
    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    let state = Arc::new(AppState::new(&cfg));

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(&addr, &cfg);

    server::run_until_shutdown(listener, state, shutdown).await
}
