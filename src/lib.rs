//! Development HTTP server for single-page applications.
//!
//! Serves static files from a directory and rewrites unmatched
//! application routes to the entry document so client-side routers
//! can be exercised without a production web server.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
