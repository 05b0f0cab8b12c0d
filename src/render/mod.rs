//! Turns a [`PageObject`] into the source of a static helper class.
//!
//! Rendering is pure: the same model and options always produce the same
//! bytes. Nothing here touches the filesystem.

pub mod labels;
pub mod literal;
pub mod tables;
pub mod template;

use std::path::{Path, PathBuf};

use crate::model::{PageObject, REPORT_IFRAME, RenderedCode, default_page_name};
use crate::normalize::pascal_case;

use labels::{normalize_path_label, normalize_title};
use literal::{js_str, single_quoted};

/// Default directory the generated class is placed in.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "cypress/support/PageObjects";

const NULL_TITLE_NOTE: &str = " // null means skip title check";

/// Language flavour of the generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetLanguage {
    #[default]
    JavaScript,
    TypeScript,
}

impl TargetLanguage {
    /// `"ts"` (any case) selects TypeScript; everything else is JavaScript.
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim().eq_ignore_ascii_case("ts") {
            TargetLanguage::TypeScript
        } else {
            TargetLanguage::JavaScript
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TargetLanguage::JavaScript => "js",
            TargetLanguage::TypeScript => "ts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub language: TargetLanguage,
    pub output_directory: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: TargetLanguage::default(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn with_output_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.output_directory = directory.as_ref().to_path_buf();
        self
    }
}

/// Class name for a page name; always a valid identifier.
pub fn class_name_for(name: &str) -> String {
    let mut class_name = pascal_case(name);
    if class_name.is_empty() {
        return default_page_name();
    }
    if class_name.starts_with(|ch: char| ch.is_ascii_digit()) {
        class_name.insert(0, '_');
    }
    class_name
}

/// Renders the helper class for `po`.
pub fn render_po(po: &PageObject, options: &RenderOptions) -> RenderedCode {
    let class_name = class_name_for(&po.page.name);
    let file_name = format!("{}.{}", class_name, options.language.extension());
    let path = options.output_directory.join(&file_name);

    let title = normalize_title(po.page.title.as_deref());
    let page_url = if po.page.url.is_empty() { "/" } else { po.page.url.as_str() };
    let page_path = normalize_path_label(&po.page.path_label);

    let (reports, bindings) = tables::report_entries(&po.reports);
    let output_path = path
        .to_string_lossy()
        .replace('\\', "/")
        .replace(['\n', '\r', '\u{2028}', '\u{2029}'], " ");
    let version = template::TEMPLATE_VERSION.to_string();

    let breadcrumbs = tables::breadcrumb_entries(&po.breadcrumbs);
    let buttons = tables::button_entries(&po.buttons);
    let form_fields = tables::form_field_entries(&po.form_fields);
    let run_methods = tables::run_methods(&bindings);
    let page_title = js_str(title.as_deref());
    let page_url = js_str(Some(page_url));
    let page_path = js_str(Some(page_path.as_str()));
    let iframe = single_quoted(Some(REPORT_IFRAME));

    let code = template::fill(
        template::PAGE_OBJECT_TEMPLATE,
        &[
            ("OUTPUT_PATH", output_path.as_str()),
            ("TEMPLATE_VERSION", version.as_str()),
            ("CLASS_NAME", class_name.as_str()),
            ("PAGE_TITLE", page_title.as_str()),
            ("PAGE_TITLE_NOTE", if title.is_none() { NULL_TITLE_NOTE } else { "" }),
            ("PAGE_URL", page_url.as_str()),
            ("PAGE_PATH", page_path.as_str()),
            ("ADMIN_ONLY", if po.page.admin_only { "true" } else { "false" }),
            ("IFRAME_SEL", iframe.as_str()),
            ("BREADCRUMBS", breadcrumbs.as_str()),
            ("BUTTONS", buttons.as_str()),
            ("FORM_FIELDS", form_fields.as_str()),
            ("REPORTS", reports.as_str()),
            ("RUN_METHODS", run_methods.as_str()),
        ],
    );

    ::log::debug!(
        "Rendered {} ({} breadcrumbs, {} buttons, {} fields, {} reports)",
        file_name,
        po.breadcrumbs.len(),
        po.buttons.len(),
        po.form_fields.len(),
        po.reports.len()
    );

    RenderedCode {
        class_name,
        file_name,
        code,
        path,
        reports: bindings,
    }
}
