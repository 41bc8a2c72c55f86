// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fallback: FallbackConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Single-page application fallback configuration
///
/// Controls how request paths with no file behind them are classified:
/// asset-like paths keep their natural 404, everything else is rewritten
/// to the entry document.
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Directory the server reads from, relative to the working directory
    pub root_dir: String,
    /// Document served for unmatched application routes
    pub entry_document: String,
    /// Path prefixes that name backend endpoints rather than routes
    pub asset_prefixes: Vec<String>,
    /// File extensions that name build artifacts rather than routes
    pub asset_extensions: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            root_dir: ".".to_string(),
            entry_document: "index.html".to_string(),
            asset_prefixes: vec!["api/".to_string()],
            asset_extensions: [".js", ".css", ".png", ".jpg", ".ico", ".svg", ".json"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
    pub max_body_size: u64,
}
