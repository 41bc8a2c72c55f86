//! Request path resolution module
//!
//! Maps an incoming request path to the file that should answer it:
//! the named file when it exists, a plain 404 for missing build
//! artifacts and API endpoints, and the entry document for everything
//! else so client-side routing can take over.

use crate::config::FallbackConfig;

/// Outcome of resolving a request path against the served directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path names a file that exists; serve it verbatim
    Existing(String),
    /// Asset-like path with nothing on disk; the file handler's
    /// standard 404 is the right answer
    MissingAsset(String),
    /// Unmatched application route; serve the entry document instead
    EntryDocument(String),
}

impl Resolution {
    /// The path the static file handler should attempt to serve
    pub fn effective_path(&self) -> &str {
        match self {
            Self::Existing(path) | Self::MissingAsset(path) | Self::EntryDocument(path) => path,
        }
    }
}

/// Resolve a raw request path to an effective serve path
///
/// Pure function of the path and the supplied existence check; it holds
/// no state, raises no errors, and is safe to call concurrently from any
/// number of handler tasks.
///
/// # Examples
/// ```
/// use spa_server::config::FallbackConfig;
/// use spa_server::routing::{resolve, Resolution};
///
/// let rules = FallbackConfig::default();
/// let exists = |p: &str| p == "app.js";
///
/// assert_eq!(resolve("/app.js", &rules, exists), Resolution::Existing("app.js".into()));
/// assert_eq!(resolve("/about", &rules, exists), Resolution::EntryDocument("index.html".into()));
/// ```
pub fn resolve<F>(raw_path: &str, rules: &FallbackConfig, file_exists: F) -> Resolution
where
    F: Fn(&str) -> bool,
{
    // The bare root is an alias for the entry document
    let candidate = if raw_path == "/" {
        rules.entry_document.clone()
    } else {
        raw_path.trim_start_matches('/').to_string()
    };

    if file_exists(&candidate) {
        return Resolution::Existing(candidate);
    }

    if is_asset_like(&candidate, rules) {
        return Resolution::MissingAsset(candidate);
    }

    Resolution::EntryDocument(rules.entry_document.clone())
}

/// Check whether a path names a build artifact or backend endpoint
/// rather than an application route
fn is_asset_like(candidate: &str, rules: &FallbackConfig) -> bool {
    rules
        .asset_prefixes
        .iter()
        .any(|prefix| candidate.starts_with(prefix.as_str()))
        || rules
            .asset_extensions
            .iter()
            .any(|ext| candidate.ends_with(ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> FallbackConfig {
        FallbackConfig::default()
    }

    /// Existence check over a fixed directory listing
    fn on_disk(candidate: &str) -> bool {
        matches!(candidate, "index.html" | "app.js" | "styles.css")
    }

    #[test]
    fn test_root_aliases_entry_document() {
        assert_eq!(
            resolve("/", &rules(), on_disk),
            Resolution::Existing("index.html".to_string())
        );
        // Same outcome as naming the entry document directly
        assert_eq!(
            resolve("/index.html", &rules(), on_disk),
            Resolution::Existing("index.html".to_string())
        );
    }

    #[test]
    fn test_existing_file_served_verbatim() {
        assert_eq!(
            resolve("/app.js", &rules(), on_disk),
            Resolution::Existing("app.js".to_string())
        );
        assert_eq!(
            resolve("/styles.css", &rules(), on_disk),
            Resolution::Existing("styles.css".to_string())
        );
    }

    #[test]
    fn test_missing_asset_keeps_not_found() {
        assert_eq!(
            resolve("/missing.png", &rules(), on_disk),
            Resolution::MissingAsset("missing.png".to_string())
        );
        assert_eq!(
            resolve("/bundle.js", &rules(), on_disk),
            Resolution::MissingAsset("bundle.js".to_string())
        );
    }

    #[test]
    fn test_api_prefix_keeps_not_found() {
        assert_eq!(
            resolve("/api/users", &rules(), on_disk),
            Resolution::MissingAsset("api/users".to_string())
        );
    }

    #[test]
    fn test_unmatched_route_falls_back() {
        assert_eq!(
            resolve("/about", &rules(), on_disk),
            Resolution::EntryDocument("index.html".to_string())
        );
    }

    #[test]
    fn test_multi_segment_route_falls_back() {
        assert_eq!(
            resolve("/dashboard/settings", &rules(), on_disk),
            Resolution::EntryDocument("index.html".to_string())
        );
    }

    #[test]
    fn test_repeated_separators_stripped() {
        assert_eq!(
            resolve("//about", &rules(), on_disk),
            Resolution::EntryDocument("index.html".to_string())
        );
        assert_eq!(
            resolve("//app.js", &rules(), on_disk),
            Resolution::Existing("app.js".to_string())
        );
    }

    #[test]
    fn test_extension_must_be_suffix() {
        // "js" without the dot is a route, not an asset
        assert_eq!(
            resolve("/downloads", &rules(), on_disk),
            Resolution::EntryDocument("index.html".to_string())
        );
        // "apiary" does not match the "api/" prefix
        assert_eq!(
            resolve("/apiary", &rules(), on_disk),
            Resolution::EntryDocument("index.html".to_string())
        );
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let first = resolve("/dashboard", &rules(), on_disk);
        let second = resolve("/dashboard", &rules(), on_disk);
        assert_eq!(first, second);
    }
}
