use scraper::ElementRef;

use crate::dom::{Snapshot, attr, closest, is_visible, parent_element, select_within, text_content};
use crate::extract::dedup_first;
use crate::extract::selectors::SELECTORS;
use crate::model::Report;

/// Collects favorite-control report links, unique by link id.
pub fn collect_reports(snapshot: &Snapshot) -> Vec<Report> {
    let mut found = Vec::new();

    for link in snapshot.select(&SELECTORS.report_links) {
        if !is_visible(link) {
            continue;
        }
        let Some(link_id) = attr(link, "data-linkid") else {
            continue;
        };

        let title = closest(link, &SELECTORS.report_panels)
            .or_else(|| parent_element(link))
            .and_then(panel_title);
        found.push(Report::new(link_id, title));
    }

    let reports = dedup_first(found, |report| report.link_id.clone());
    ::log::debug!("Collected {} reports", reports.len());
    reports
}

/// First non-empty title inside the panel, by selector preference.
fn panel_title(panel: ElementRef<'_>) -> Option<String> {
    SELECTORS.report_titles.iter().find_map(|selector| {
        select_within(panel, selector)
            .next()
            .map(text_content)
            .filter(|title| !title.is_empty())
    })
}
