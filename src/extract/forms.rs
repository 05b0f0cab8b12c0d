use crate::dom::{Snapshot, attr, is_visible, tag_name};
use crate::extract::selectors::SELECTORS;
use crate::model::FormField;
use crate::normalize::first_present;

/// Collects visible inputs, selects and textareas that have an id or test id.
pub fn collect_form_fields(snapshot: &Snapshot) -> Vec<FormField> {
    let mut fields = Vec::new();

    for el in snapshot.select(&SELECTORS.form_fields) {
        if !is_visible(el) {
            continue;
        }
        let id = attr(el, "id");
        let data_test_id = attr(el, "data-testid");
        if id.is_none() && data_test_id.is_none() {
            continue;
        }

        let name = attr(el, "name");
        let placeholder = attr(el, "placeholder");
        let field_type = attr(el, "type").unwrap_or(tag_name(el)).to_lowercase();
        let description = first_present(&[
            ((), name),
            ((), placeholder),
            ((), id),
            ((), data_test_id),
        ])
        .map(|(_, value)| value.to_string())
        .unwrap_or_default();

        fields.push(FormField {
            description,
            id: id.map(str::to_string),
            data_test_id: data_test_id.map(str::to_string),
            name: name.map(str::to_string),
            placeholder: placeholder.map(str::to_string),
            field_type,
            fallback_selector: None,
        });
    }

    ::log::debug!("Collected {} form fields", fields.len());
    fields
}
