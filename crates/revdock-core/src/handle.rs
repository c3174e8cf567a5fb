//! Storefront handle validation.

use std::sync::LazyLock;

use regex::Regex;

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

/// Returns true when `handle` is a well-formed storefront handle: lowercase
/// ASCII alphanumeric runs separated by single dashes, no leading or
/// trailing dash, never empty.
#[must_use]
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_RE.is_match(handle)
}
