use regex::Regex;
use std::sync::LazyLock;

use crate::model::PathLabel;
use crate::normalize::collapse_whitespace;

static PIPE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("pipe separator pattern should be valid"));

/// `"ACME | Analytics - Search All"` -> `"Analytics - Search All"`.
///
/// Whitespace is collapsed first; an empty title is `None`.
pub fn normalize_title(title: Option<&str>) -> Option<String> {
    let collapsed = collapse_whitespace(title.unwrap_or(""));
    if collapsed.is_empty() {
        return None;
    }
    match collapsed.rsplit_once('|') {
        Some((_, last)) => Some(last.trim().to_string()),
        None => Some(collapsed),
    }
}

/// Flattens a path label into the `"Analytics , Search All"` shape.
///
/// Fragments that are all single characters are treated as a split-up
/// string and joined without a separator.
pub fn normalize_path_label(label: &PathLabel) -> String {
    let joined = match label {
        PathLabel::Text(text) => text.clone(),
        PathLabel::Parts(_) => {
            let fragments: Vec<&str> = label
                .fragments()
                .into_iter()
                .filter(|fragment| !fragment.is_empty())
                .collect();
            let single_chars = !fragments.is_empty()
                && fragments.iter().all(|fragment| fragment.chars().count() == 1);
            if single_chars {
                fragments.concat()
            } else {
                fragments.join(" | ")
            }
        }
    };
    PIPE_SEPARATOR.replace_all(&joined, " , ").into_owned()
}
