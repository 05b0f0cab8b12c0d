use scraper::ElementRef;

use crate::dom::{Snapshot, attr, is_visible, tag_name, text_content};
use crate::extract::dedup_first;
use crate::extract::selectors::SELECTORS;
use crate::model::Button;
use crate::normalize::{collapse_whitespace, first_present, strip_base_path};

/// Collects clickable elements that can be addressed by test id or id.
///
/// Matches without either are skipped even when a broad pattern caught them.
/// Buttons are unique by test id, then id, then description.
pub fn collect_buttons(snapshot: &Snapshot, base_url: &str) -> Vec<Button> {
    let mut found = Vec::new();

    for el in snapshot.select(&SELECTORS.buttons) {
        if !is_visible(el) {
            continue;
        }

        let data_test_id = attr(el, "data-testid");
        let id = attr(el, "id");
        if data_test_id.is_none() && id.is_none() {
            ::log::trace!(
                "Skipping <{}> without id or data-testid: {:?}",
                tag_name(el),
                text_content(el)
            );
            continue;
        }

        let name = accessible_name(el);
        let expected_url = if tag_name(el) == "a" {
            attr(el, "href")
                .map(|href| strip_base_path(href, base_url))
                .filter(|url| !url.is_empty())
        } else {
            None
        };

        let description = first_present(&[
            ((), name.as_deref()),
            ((), data_test_id),
            ((), id),
        ])
        .map(|(_, value)| value.to_string())
        .unwrap_or_default();

        found.push(Button {
            description,
            name,
            data_test_id: data_test_id.map(str::to_string),
            id: id.map(str::to_string),
            expected_url,
            expected_title: None,
        });
    }

    let buttons = dedup_first(found, |button| {
        first_present(&[
            ("data-testid", button.data_test_id.as_deref()),
            ("id", button.id.as_deref()),
            ("description", Some(button.description.as_str())),
        ])
        .map(|(field, value)| (field, value.to_string()))
    });
    ::log::debug!("Collected {} buttons", buttons.len());
    buttons
}

/// `aria-label`, then `title`, then text content; first that is non-empty.
fn accessible_name(el: ElementRef<'_>) -> Option<String> {
    let aria_label = el.value().attr("aria-label").map(collapse_whitespace);
    let title = el.value().attr("title").map(collapse_whitespace);
    let text = text_content(el);

    first_present(&[
        ((), aria_label.as_deref()),
        ((), title.as_deref()),
        ((), Some(text.as_str())),
    ])
    .map(|(_, value)| value.to_string())
}
