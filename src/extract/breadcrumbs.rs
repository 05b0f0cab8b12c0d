use crate::dom::{Snapshot, is_visible, select_within, text_content};
use crate::extract::dedup_first;
use crate::extract::selectors::SELECTORS;
use crate::model::Breadcrumb;
use crate::normalize::strip_base_path;

/// Collects breadcrumb links, unique by description and URL.
///
/// A `Home` link whose href strips to nothing points at the base root and
/// gets `/` as its expected URL.
pub fn collect_breadcrumbs(snapshot: &Snapshot, base_url: &str) -> Vec<Breadcrumb> {
    let mut found = Vec::new();

    for container in snapshot.select(&SELECTORS.breadcrumb_containers) {
        for link in select_within(container, &SELECTORS.breadcrumb_links) {
            if !is_visible(link) {
                continue;
            }
            let description = text_content(link);
            if description.is_empty() {
                continue;
            }

            let href = link.value().attr("href").unwrap_or("");
            let stripped = strip_base_path(href, base_url);
            let expected_url = if !stripped.is_empty() {
                Some(stripped)
            } else if description.eq_ignore_ascii_case("home") {
                Some("/".to_string())
            } else {
                None
            };

            found.push(Breadcrumb {
                description,
                expected_url,
                expected_title: None,
            });
        }
    }

    let breadcrumbs = dedup_first(found, |crumb| {
        (
            crumb.description.clone(),
            crumb.expected_url.clone().unwrap_or_default(),
        )
    });
    ::log::debug!("Collected {} breadcrumbs", breadcrumbs.len());
    breadcrumbs
}
