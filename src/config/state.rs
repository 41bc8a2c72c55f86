// Application state module
// Immutable runtime state shared by all request handler tasks

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Fixed at startup and shared read-only between connection tasks, so
/// request handling needs no locking.
pub struct AppState {
    pub config: Config,
    /// Directory all request paths are resolved against
    pub root_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            root_dir: PathBuf::from(&config.fallback.root_dir),
            config: config.clone(),
        }
    }
}
