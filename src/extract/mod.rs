pub mod breadcrumbs;
pub mod buttons;
pub mod forms;
pub mod reports;
pub mod selectors;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::hash::Hash;

use crate::dom::Snapshot;
use crate::model::{PageInfo, PageObject, PathLabel, default_page_name};
use crate::normalize::strip_base_path;

pub use breadcrumbs::collect_breadcrumbs;
pub use buttons::collect_buttons;
pub use forms::collect_form_fields;
pub use reports::collect_reports;

/// Caller-supplied page metadata for one extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    pub name: String,
    /// Page URL; when it resolves to nothing the snapshot location is used
    pub url: String,
    pub path_label: PathLabel,
    pub admin_only: bool,
    /// Base root stripped from every URL
    pub base_url: String,
    pub title: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            name: default_page_name(),
            url: String::new(),
            path_label: PathLabel::default(),
            admin_only: false,
            base_url: String::new(),
            title: None,
        }
    }
}

impl ExtractOptions {
    /// Create options for the named page with default values
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn with_path_label(mut self, path_label: impl Into<PathLabel>) -> Self {
        self.path_label = path_label.into();
        self
    }

    pub fn with_admin_only(mut self, admin_only: bool) -> Self {
        self.admin_only = admin_only;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

/// Builds a page object from one DOM snapshot.
///
/// Never fails: elements missing the attributes a collector needs are left
/// out, and a page URL that cannot be resolved stays empty.
pub fn build_po_from_dom(snapshot: &Snapshot, options: &ExtractOptions) -> PageObject {
    ::log::debug!("Extracting page object for {}", options.name);

    let mut url = strip_base_path(&options.url, &options.base_url);
    if url.is_empty() {
        match snapshot.location() {
            Some(location) => {
                url = strip_base_path(location, &options.base_url);
                ::log::trace!("Page URL taken from snapshot location: {:?}", url);
            }
            None => ::log::trace!("No page URL and no snapshot location"),
        }
    }

    PageObject {
        page: PageInfo {
            name: options.name.clone(),
            title: options.title.clone(),
            url,
            path_label: options.path_label.clone(),
            admin_only: options.admin_only,
        },
        breadcrumbs: collect_breadcrumbs(snapshot, &options.base_url),
        buttons: collect_buttons(snapshot, &options.base_url),
        form_fields: collect_form_fields(snapshot),
        reports: collect_reports(snapshot),
    }
}

/// Keeps the first item for every key, preserving order.
pub(crate) fn dedup_first<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
