//! Read-only view over a parsed page.
//!
//! The extractor only needs selector queries, attribute reads, text content
//! and closest-ancestor lookups; this module keeps those in one place so the
//! collectors never touch the tree directly.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::normalize::collapse_whitespace;

static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bdisplay\s*:\s*none\b|\bvisibility\s*:\s*hidden\b")
        .expect("hidden style pattern should be valid")
});

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector should be valid"));

/// A DOM snapshot plus the location it was taken at, when known.
pub struct Snapshot {
    document: Html,
    location: Option<String>,
}

impl Snapshot {
    /// Parses an HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self::from_html(Html::parse_document(html))
    }

    /// Wraps an already parsed document.
    pub fn from_html(document: Html) -> Self {
        Self {
            document,
            location: None,
        }
    }

    /// Attaches the location (absolute URL or path) the snapshot was taken at.
    pub fn with_location(mut self, href: &str) -> Self {
        self.location = Some(href.to_string());
        self
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.document.select(selector)
    }

    /// Whitespace-collapsed text of the document `<title>`, if non-empty.
    pub fn title(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(text_content)
            .filter(|title| !title.is_empty())
    }
}

/// Visible unless the inline style hides it.
///
/// Stylesheets are not consulted: snapshots have no live layout, so anything
/// not hidden inline counts as visible.
pub fn is_visible(el: ElementRef<'_>) -> bool {
    match el.value().attr("style") {
        Some(style) => !HIDDEN_STYLE.is_match(style),
        None => true,
    }
}

/// Attribute value, treating an empty attribute as absent.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).filter(|value| !value.is_empty())
}

/// Whitespace-collapsed text content of the element and its descendants.
pub fn text_content(el: ElementRef<'_>) -> String {
    collapse_whitespace(&el.text().collect::<String>())
}

/// Lower-case tag name.
pub fn tag_name<'a>(el: ElementRef<'a>) -> &'a str {
    el.value().name()
}

/// Nearest inclusive ancestor matching `selector`.
pub fn closest<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .find(|candidate| selector.matches(candidate))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Descendants of `el` matching `selector`, excluding `el` itself.
pub fn select_within<'a, 'b>(
    el: ElementRef<'a>,
    selector: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> {
    let own_id = el.id();
    el.select(selector).filter(move |found| found.id() != own_id)
}
