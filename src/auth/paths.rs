//! Path-exclusion rules for authentication.
//!
//! Decides whether a request path needs credentials given a list of
//! excluded patterns. A trailing `*` is a prefix wildcard; any other
//! pattern excludes the exact path and everything under it as a
//! directory.

use regex::Regex;

/// Compile one exclusion pattern into an anchored matcher.
///
/// The pattern body is escaped, so metacharacters in configured paths
/// match literally. Anchoring both ends keeps `/api/v1/status` from
/// excluding `/api/v1/statusfoo`.
fn exclusion_pattern(excluded: &str) -> Regex {
    let excluded = excluded.trim();
    let source = if let Some(prefix) = excluded.strip_suffix('*') {
        format!("^{}.*$", regex::escape(prefix))
    } else {
        let base = excluded.strip_suffix('/').unwrap_or(excluded);
        format!("^{}(/.*)?$", regex::escape(base))
    };

    Regex::new(&source).expect("escaped exclusion pattern is always valid")
}

/// Whether `path` requires authentication given `excluded_paths`.
///
/// A `None` path or a missing/empty exclusion list always requires it.
pub fn require_auth(path: Option<&str>, excluded_paths: Option<&[&str]>) -> bool {
    let (path, excluded) = match (path, excluded_paths) {
        (Some(path), Some(excluded)) if !excluded.is_empty() => (path, excluded),
        _ => return true,
    };

    !excluded
        .iter()
        .any(|pattern| exclusion_pattern(pattern).is_match(path))
}
