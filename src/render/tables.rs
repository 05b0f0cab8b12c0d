//! Data-driven parts of the generated class: one literal record per key.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::model::{Breadcrumb, Button, FormField, REPORT_IFRAME, Report, ReportBinding};
use crate::normalize::{capitalize, first_present, to_key};
use crate::render::literal::{js_str, single_quoted};

const ENTRY_INDENT: &str = "    ";

static NON_IDENT_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{XID_Continue}]").expect("identifier continue pattern should be valid")
});

static IDENT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{XID_Start}_]").expect("identifier start pattern should be valid")
});

/// Hands out table keys that are valid identifiers and unique per table.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    used: HashSet<String>,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for the first present candidate, or for `fallback`.
    ///
    /// Characters that cannot appear in an identifier become `_`, and a key
    /// that cannot start an identifier gets a leading `_`. A key already
    /// handed out gets the next free `_2`, `_3`, ... suffix.
    pub fn allocate(&mut self, candidates: &[Option<&str>], fallback: &str) -> String {
        let tagged: Vec<((), Option<&str>)> = candidates.iter().map(|value| ((), *value)).collect();
        let label = first_present(&tagged).map_or(fallback, |(_, value)| value);

        let mut key = NON_IDENT_CHAR.replace_all(&to_key(label, fallback), "_").into_owned();
        if !IDENT_START.is_match(&key) {
            key.insert(0, '_');
        }

        let mut candidate = key.clone();
        let mut suffix = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{}_{}", key, suffix);
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Selector for an element addressed by test id, id or a raw fallback.
pub fn selector_for(
    data_test_id: Option<&str>,
    id: Option<&str>,
    fallback: Option<&str>,
) -> Option<String> {
    if let Some(test_id) = data_test_id.filter(|value| !value.is_empty()) {
        return Some(format!(r#"[data-testid="{}"]"#, css_string_escape(test_id)));
    }
    if let Some(id) = id.filter(|value| !value.is_empty()) {
        if id.starts_with('#') || id.starts_with('.') {
            return Some(id.to_string());
        }
        return Some(format!("#{}", id));
    }
    fallback.filter(|value| !value.is_empty()).map(str::to_string)
}

/// Escapes a value for a double-quoted CSS attribute string.
fn css_string_escape(value: &str) -> String {
    value.replace('\\', r"\\").replace('"', r#"\""#)
}

pub fn breadcrumb_entries(breadcrumbs: &[Breadcrumb]) -> String {
    let mut keys = KeyAllocator::new();
    breadcrumbs
        .iter()
        .map(|crumb| {
            let key = keys.allocate(
                &[Some(crumb.description.as_str()), crumb.expected_url.as_deref()],
                "BREADCRUMB",
            );
            let is_home = crumb.description.trim().eq_ignore_ascii_case("home");
            let expected_url = match crumb.expected_url.as_deref() {
                Some(url) if !url.is_empty() => Some(url),
                _ if is_home => Some("/"),
                _ => None,
            };
            format!(
                "{}{}: {{ description: {}, expectedURL: {}, expectedTitle: {} }},",
                ENTRY_INDENT,
                key,
                js_str(Some(crumb.description.as_str())),
                js_str(expected_url),
                js_str(crumb.expected_title.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn button_entries(buttons: &[Button]) -> String {
    let mut keys = KeyAllocator::new();
    buttons
        .iter()
        .map(|button| {
            let key = keys.allocate(
                &[
                    Some(button.description.as_str()),
                    button.data_test_id.as_deref(),
                    button.id.as_deref(),
                ],
                "BUTTON",
            );
            let selector = selector_for(button.data_test_id.as_deref(), button.id.as_deref(), None);
            let expected_url = button.expected_url.as_deref().filter(|url| !url.is_empty());
            format!(
                "{}{}: {{ description: {}, name: {}, dataTestId: {}, id: {}, expectedURL: {}, expectedTitle: {}, selector: {} }},",
                ENTRY_INDENT,
                key,
                js_str(Some(button.description.as_str())),
                js_str(button.name.as_deref()),
                js_str(button.data_test_id.as_deref()),
                js_str(button.id.as_deref()),
                js_str(expected_url),
                js_str(button.expected_title.as_deref()),
                single_quoted(selector.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn form_field_entries(fields: &[FormField]) -> String {
    let mut keys = KeyAllocator::new();
    fields
        .iter()
        .map(|field| {
            let key = keys.allocate(
                &[
                    Some(field.description.as_str()),
                    field.data_test_id.as_deref(),
                    field.id.as_deref(),
                ],
                "FIELD",
            );
            let selector = selector_for(
                field.data_test_id.as_deref(),
                field.id.as_deref(),
                field.fallback_selector.as_deref(),
            );
            format!(
                "{}{}: {{ description: {}, id: {}, dataTestId: {}, name: {}, placeholder: {}, type: {}, selector: {} }},",
                ENTRY_INDENT,
                key,
                js_str(Some(field.description.as_str())),
                js_str(field.id.as_deref()),
                js_str(field.data_test_id.as_deref()),
                js_str(field.name.as_deref()),
                js_str(field.placeholder.as_deref()),
                js_str(Some(field.field_type.as_str())),
                single_quoted(selector.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Report records plus the key bindings used for the run methods.
pub fn report_entries(reports: &[Report]) -> (String, Vec<ReportBinding>) {
    let mut keys = KeyAllocator::new();
    let mut bindings = Vec::with_capacity(reports.len());
    let mut lines = Vec::with_capacity(reports.len());

    for report in reports {
        let key = keys.allocate(&[Some(report.link_id.as_str()), report.title.as_deref()], "REPORT");
        let iframe = if report.expected_iframe.is_empty() {
            REPORT_IFRAME
        } else {
            report.expected_iframe.as_str()
        };
        lines.push(format!(
            "{}{}: {{ linkId: {}, title: {}, interceptedURL: {}, expectedIframe: {} }},",
            ENTRY_INDENT,
            key,
            js_str(Some(report.link_id.as_str())),
            js_str(report.title.as_deref()),
            js_str(Some(report.intercepted_url.as_str())),
            js_str(Some(iframe)),
        ));
        bindings.push(ReportBinding {
            method: method_name(&key),
            key,
            link_id: report.link_id.clone(),
        });
    }

    (lines.join("\n"), bindings)
}

/// `TEMPPROFILES` -> `runTempprofiles`.
pub fn method_name(key: &str) -> String {
    format!("run{}", capitalize(&key.to_lowercase()))
}

/// One zero-argument convenience method per report.
pub fn run_methods(bindings: &[ReportBinding]) -> String {
    bindings
        .iter()
        .map(|binding| {
            format!(
                "  static {}(opts = {{}}) {{ return this.runReportKey({}, opts); }}",
                binding.method,
                single_quoted(Some(binding.key.as_str())),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_allocator_collisions_and_digits() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.allocate(&[Some("Save")], "BUTTON"), "SAVE");
        assert_eq!(keys.allocate(&[Some("save")], "BUTTON"), "SAVE_2");
        assert_eq!(keys.allocate(&[Some("SAVE 2")], "BUTTON"), "SAVE_2_2");
        assert_eq!(keys.allocate(&[Some("3D View")], "BUTTON"), "_3D_VIEW");
        assert_eq!(keys.allocate(&[None, Some(""), Some("btn-x")], "BUTTON"), "BTN_X");
        assert_eq!(keys.allocate(&[None], "BUTTON"), "BUTTON");
        assert_eq!(keys.allocate(&[Some("!!!")], "BUTTON"), "BUTTON_2");
    }

    #[test]
    fn test_key_allocator_non_ascii_numbers() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.allocate(&[Some("٣reports")], "REPORT"), "_٣REPORTS");
        assert_eq!(keys.allocate(&[Some("step½")], "REPORT"), "STEP_");
        assert_eq!(keys.allocate(&[Some("²nd level")], "REPORT"), "_ND_LEVEL");
        assert_eq!(keys.allocate(&[Some("Übersicht")], "REPORT"), "ÜBERSICHT");
    }

    #[test]
    fn test_report_keys_and_methods_are_identifiers() {
        let reports = vec![Report::new("٣reports", None), Report::new("step½", None)];
        let (rows, bindings) = report_entries(&reports);
        assert!(rows.contains(r#"    _٣REPORTS: { linkId: "٣reports","#));
        assert!(rows.contains(r#"    STEP_: { linkId: "step½","#));
        assert_eq!(bindings[0].method, "run_٣reports");
        assert_eq!(bindings[1].method, "runStep_");

        let crumbs = vec![Breadcrumb {
            description: "²nd level".to_string(),
            expected_url: None,
            expected_title: None,
        }];
        assert!(breadcrumb_entries(&crumbs).starts_with(r#"    _ND_LEVEL: { description: "²nd level","#));

        for binding in &bindings {
            let mut chars = binding.method.chars();
            assert!(chars.next().is_some_and(|ch| IDENT_START.is_match(&ch.to_string())));
            assert!(!NON_IDENT_CHAR.is_match(chars.as_str()), "{}", binding.method);
        }
    }

    #[test]
    fn test_selector_for() {
        assert_eq!(
            selector_for(Some("npsearch"), Some("ignored"), None).as_deref(),
            Some(r#"[data-testid="npsearch"]"#)
        );
        assert_eq!(
            selector_for(Some(r#"a"b\c"#), None, None).as_deref(),
            Some(r#"[data-testid="a\"b\\c"]"#)
        );
        assert_eq!(selector_for(None, Some("save"), None).as_deref(), Some("#save"));
        assert_eq!(selector_for(None, Some("#save"), None).as_deref(), Some("#save"));
        assert_eq!(selector_for(None, Some(".save"), None).as_deref(), Some(".save"));
        assert_eq!(
            selector_for(None, None, Some("form > input")).as_deref(),
            Some("form > input")
        );
        assert_eq!(selector_for(Some(""), Some(""), None), None);
    }

    #[test]
    fn test_breadcrumb_home_defaults_to_root() {
        let crumbs = vec![
            Breadcrumb {
                description: "Home".to_string(),
                expected_url: Some(String::new()),
                expected_title: None,
            },
            Breadcrumb {
                description: "Analytics".to_string(),
                expected_url: None,
                expected_title: None,
            },
        ];
        let rendered = breadcrumb_entries(&crumbs);
        assert_eq!(
            rendered,
            "    HOME: { description: \"Home\", expectedURL: \"/\", expectedTitle: null },\n    \
             ANALYTICS: { description: \"Analytics\", expectedURL: null, expectedTitle: null },"
        );
    }

    #[test]
    fn test_report_bindings_and_run_methods() {
        let reports = vec![
            Report::new("tempProfiles", Some("Temporal Allocation Profiles".to_string())),
            Report::new("temp-profiles", None),
        ];
        let (rows, bindings) = report_entries(&reports);

        assert!(rows.contains(r##"TEMPPROFILES: { linkId: "tempProfiles", title: "Temporal Allocation Profiles", interceptedURL: "aLinkId=tempProfiles", expectedIframe: "#lkDialogFrame" },"##));
        assert_eq!(bindings[0].key, "TEMPPROFILES");
        assert_eq!(bindings[0].method, "runTempprofiles");
        assert_eq!(bindings[1].key, "TEMP_PROFILES");
        assert_eq!(bindings[1].method, "runTemp_profiles");

        let methods = run_methods(&bindings);
        assert!(methods.contains(
            "  static runTempprofiles(opts = {}) { return this.runReportKey('TEMPPROFILES', opts); }"
        ));
    }

    #[test]
    fn test_form_field_selector_uses_fallback() {
        let fields = vec![FormField {
            description: "q".to_string(),
            id: None,
            data_test_id: None,
            name: None,
            placeholder: None,
            field_type: "input".to_string(),
            fallback_selector: Some("input[name='q']".to_string()),
        }];
        let rendered = form_field_entries(&fields);
        assert!(rendered.contains(r"selector: 'input[name=\'q\']'"));
        assert!(rendered.starts_with("    Q: { description: \"q\""));
    }
}
