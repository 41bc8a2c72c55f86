//! Static file serving module
//!
//! Loads files from the served directory and builds responses with
//! content type, validator, and range support. File access errors map
//! onto their HTTP statuses unchanged: missing file 404, permission
//! denied 403, any other I/O failure 500.

use crate::handler::router::RequestContext;
use crate::http::{cache, mime, range::RangeParseResult, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::{self, ErrorKind};
use std::path::Path;
use tokio::fs;

/// Serve the file a resolved path names, relative to the served root
pub async fn serve_path(
    ctx: &RequestContext<'_>,
    root: &Path,
    candidate: &str,
) -> Response<Full<Bytes>> {
    match load_file(root, candidate).await {
        Ok((content, content_type)) => build_static_file_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
            ctx.range_header.as_deref(),
        ),
        Err(e) => file_error_response(candidate, &e),
    }
}

/// Read a file confined to the served root
///
/// The canonicalized file path must stay inside the canonicalized root;
/// anything that escapes is refused as permission-denied.
async fn load_file(root: &Path, candidate: &str) -> io::Result<(Vec<u8>, &'static str)> {
    let root_canonical = root.canonicalize()?;
    let file_path = root_canonical.join(candidate).canonicalize()?;

    if !file_path.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {candidate} -> {}",
            file_path.display()
        ));
        return Err(io::Error::new(
            ErrorKind::PermissionDenied,
            "request path escapes the served directory",
        ));
    }

    let content = fs::read(&file_path).await?;
    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));

    Ok((content, content_type))
}

/// Map a file access error onto its HTTP status
fn file_error_response(candidate: &str, err: &io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        // File not found is common (404), no need to log
        ErrorKind::NotFound => response::build_404_response(),
        ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Access denied for '{candidate}': {err}"));
            response::build_403_response()
        }
        _ => {
            logger::log_error(&format!("Failed to read '{candidate}': {err}"));
            response::build_500_response()
        }
    }
}

/// Build a file response with `ETag` and Range support
fn build_static_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
    range_header: Option<&str>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    // Check if client has a current cached version
    if cache::check_etag_match(if_none_match, &etag) {
        return response::build_304_response(&etag);
    }

    // Check for Range request
    match crate::http::parse_range_header(range_header, total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            return response::build_partial_response(
                body,
                content_type,
                &etag,
                start,
                end,
                total_size,
                is_head,
            );
        }
        RangeParseResult::NotSatisfiable => {
            return response::build_416_response(total_size);
        }
        RangeParseResult::None => {
            // No Range header or malformed, return full content
        }
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    response::build_file_response(body, content_type, &etag, is_head)
}
