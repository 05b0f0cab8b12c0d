mod form_tests;
mod report_tests;

use crate::dom::Snapshot;
use crate::extract::{ExtractOptions, build_po_from_dom};
use crate::model::PageObject;

pub(crate) const BASE_URL: &str = "https://fat.ei.example.com/MOEIL";

/// Extracts with the shared base URL and otherwise default options.
pub(crate) fn extract(html: &str) -> PageObject {
    let snapshot = Snapshot::parse(html);
    build_po_from_dom(&snapshot, &ExtractOptions::default().with_base_url(BASE_URL))
}
