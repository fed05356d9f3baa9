//! Static-source extraction strategy.
//!
//! Pattern-matches the plugin source for a `route_paths` function whose
//! body is a direct literal `vec![...]` of string literals and recovers
//! those literals in order. Any computed or derived path is invisible to
//! this strategy — a documented limitation, not a bug; the built-artifact
//! strategy is the authoritative fallback.

use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

/// Attempts to recover route paths from a plugin source file.
///
/// Returns `None` on any miss — absent file, unreadable file, no
/// literal-return `route_paths` body, empty literal array. Never errors:
/// every failure here just hands off to the next strategy.
pub fn extract_from_source(source_path: &Path) -> Option<Vec<String>> {
    if !source_path.exists() {
        debug!(path = %source_path.display(), "Source file absent, skipping source strategy");
        return None;
    }

    let content = match std::fs::read_to_string(source_path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %source_path.display(), error = %e, "Failed to read source file");
            return None;
        }
    };

    let paths = scan_literal_route_paths(&content);
    if paths.is_empty() {
        debug!(
            path = %source_path.display(),
            "No literal-return route_paths body found in source"
        );
        return None;
    }

    Some(paths)
}

/// Scans source text for the `route_paths` function body and pulls the
/// string literals out of its returned `vec![...]`.
fn scan_literal_route_paths(content: &str) -> Vec<String> {
    // The body match stops at the first `]`, so only a direct literal
    // return is ever recognized.
    let body_re =
        Regex::new(r"(?s)fn\s+route_paths\s*\([^)]*\)\s*->\s*[^{]+\{[^\[\]{}]*vec!\[([^\]]*)\]")
            .expect("route_paths body pattern is valid");

    let Some(captures) = body_re.captures(content) else {
        return Vec::new();
    };

    let literal_re = Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("string literal pattern is valid");

    literal_re
        .captures_iter(&captures[1])
        .map(|c| c[1].to_string())
        .collect()
}
