//! String and URL primitives shared by the extractor and the renderer.
//!
//! Everything here is pure and total: malformed input degrades to a safe
//! value instead of an error.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Fallback used by [`to_key`] callers that have nothing better.
pub const DEFAULT_KEY_FALLBACK: &str = "ITEM";

/// Neutral origin that relative references are resolved against.
static PLACEHOLDER_ORIGIN: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("http://placeholder.invalid/").expect("placeholder origin should be a valid URL")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("non-word pattern should be valid"));

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("non-alphanumeric pattern should be valid"));

/// Relativizes `url` against the path of `base_root`.
///
/// The URL is resolved against a placeholder origin to obtain
/// `pathname + search + hash`, the base root's path is removed from the front
/// (case-insensitively, together with one following `/`), and a single
/// leading `/` is dropped. Returns an empty string for empty input.
pub fn strip_base_path(url: &str, base_root: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut path = match resolve_location(trimmed) {
        Some(resolved) => resolved,
        None => {
            ::log::trace!("Treating unparsable URL as relative: {}", trimmed);
            trimmed.to_string()
        }
    };

    let base = base_path(base_root);
    let base = base.trim_end_matches('/');
    if let Some(rest) = strip_prefix_ignore_ascii_case(&path, base) {
        path = rest.strip_prefix('/').unwrap_or(rest).to_string();
    }

    match path.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => path,
    }
}

/// `text` without a leading `prefix` compared ASCII case-insensitively.
fn strip_prefix_ignore_ascii_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    text.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &text[prefix.len()..])
}

/// Resolves a URL-like string to `pathname + search + hash`.
///
/// An empty query (`?`) or fragment (`#`) contributes nothing, matching how
/// browsers report `location.search` and `location.hash`.
pub fn resolve_location(raw: &str) -> Option<String> {
    let parsed = PLACEHOLDER_ORIGIN.join(raw).ok()?;

    let mut out = parsed.path().to_string();
    if let Some(query) = parsed.query().filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parsed.fragment().filter(|f| !f.is_empty()) {
        out.push('#');
        out.push_str(fragment);
    }
    Some(out)
}

/// Path component of a base root, which may be a full URL or a bare path.
fn base_path(base_root: &str) -> String {
    if base_root.is_empty() {
        return "/".to_string();
    }
    match Url::parse(base_root) {
        Ok(parsed) if parsed.path().is_empty() => "/".to_string(),
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => base_root.to_string(),
    }
}

/// Derives an upper-case, identifier-safe key from a label.
///
/// Whitespace runs and runs of anything other than Unicode letters, digits or
/// `_` become `_`; surrounding underscores are trimmed. Returns `fallback`
/// when nothing is left.
pub fn to_key(label: &str, fallback: &str) -> String {
    let underscored = WHITESPACE_RUN.replace_all(label, "_");
    let cleaned = NON_WORD_RUN.replace_all(&underscored, "_");
    let key = cleaned.trim_matches('_').to_uppercase();
    if key.is_empty() {
        fallback.to_string()
    } else {
        key
    }
}

/// `"search all-reports"` -> `"SearchAllReports"`. Inner capitals are kept.
pub fn pascal_case(label: &str) -> String {
    NON_ALNUM_RUN
        .replace_all(label, " ")
        .split_whitespace()
        .map(capitalize)
        .collect()
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first candidate that is present and non-empty, with its tag.
///
/// Collectors and the renderer use this for every "first of several fields"
/// decision so tie-breaks stay identical everywhere.
pub fn first_present<'a, T: Copy>(candidates: &[(T, Option<&'a str>)]) -> Option<(T, &'a str)> {
    candidates
        .iter()
        .find_map(|&(tag, value)| value.filter(|v| !v.is_empty()).map(|v| (tag, v)))
}
