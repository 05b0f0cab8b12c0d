//! Ordered selector tables for every collector.
//!
//! Each table is joined into a single selector group, so matches always come
//! back in document order and an element matched by several patterns is
//! visited once.

use scraper::Selector;
use std::sync::LazyLock;

/// Containers that hold breadcrumb trails.
pub const BREADCRUMB_CONTAINERS: &[&str] = &[
    "nav.breadcrumb",
    r#"nav[aria-label*="breadcrumb" i]"#,
    "ol.breadcrumb",
    r#"[data-testid*="breadcrumb" i]"#,
];

/// Links inside a breadcrumb container.
pub const BREADCRUMB_LINKS: &[&str] = &["a[href]"];

/// Button candidates, most specific first.
pub const BUTTON_CANDIDATES: &[&str] = &[
    // main menu
    r#"[data-testid^="mnumain-"]"#,
    // analytics left rail
    r#"[data-testid="npsearch"]"#,
    r#"[data-testid="npfavorite"]"#,
    r#"[data-testid="general"]"#,
    r#"[data-testid="nonpointemissions"]"#,
    r#"[data-testid="eipointemissions"]"#,
    r#"[data-testid="onroademissions"]"#,
    r#"[data-testid][role="button"]"#,
    // anything that looks like a button
    "button",
    "a.button",
    "a.btn",
    r#"[class*="btn"]"#,
];

pub const FORM_FIELDS: &[&str] = &["input", "select", "textarea"];

pub const REPORT_LINKS: &[&str] = &["a.nav-page-favorite-control[data-linkid]"];

/// Panel-like ancestors that scope a report's title lookup.
pub const REPORT_PANELS: &[&str] = &[".ibox", ".ibox-title", ".panel", ".card"];

/// Report title candidates in order of preference.
pub const REPORT_TITLES: &[&str] = &[r#"[data-testid^="pnl-panel-title_"]"#, "p.lkPanelHeaderText"];

/// Compiled selector groups.
pub struct Selectors {
    pub breadcrumb_containers: Selector,
    pub breadcrumb_links: Selector,
    pub buttons: Selector,
    pub form_fields: Selector,
    pub report_links: Selector,
    pub report_panels: Selector,
    /// Kept separate to preserve preference order
    pub report_titles: Vec<Selector>,
}

pub static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    breadcrumb_containers: group(BREADCRUMB_CONTAINERS),
    breadcrumb_links: group(BREADCRUMB_LINKS),
    buttons: group(BUTTON_CANDIDATES),
    form_fields: group(FORM_FIELDS),
    report_links: group(REPORT_LINKS),
    report_panels: group(REPORT_PANELS),
    report_titles: REPORT_TITLES
        .iter()
        .map(|pattern| group(std::slice::from_ref(pattern)))
        .collect(),
});

/// Compiles a table into one selector group.
fn group(patterns: &[&str]) -> Selector {
    let joined = patterns.join(", ");
    Selector::parse(&joined).expect("built-in selector tables should be valid")
}
