// Request handler module entry point
// Turns accepted HTTP requests into file responses

pub mod router;
pub mod static_files;

pub use router::{handle_request, RequestContext};
