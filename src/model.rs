use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Error;

/// Structured description of one page, built from a single DOM snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageObject {
    #[serde(default)]
    pub page: PageInfo,

    #[serde(default)]
    pub breadcrumbs: Vec<Breadcrumb>,

    #[serde(default)]
    pub buttons: Vec<Button>,

    #[serde(default)]
    pub form_fields: Vec<FormField>,

    #[serde(default)]
    pub reports: Vec<Report>,
}

/// Page-level metadata supplied by the caller and resolved by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default = "default_page_name")]
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Relative to the base root, without a leading slash
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub path_label: PathLabel,

    #[serde(default)]
    pub admin_only: bool,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            name: default_page_name(),
            title: None,
            url: String::new(),
            path_label: PathLabel::default(),
            admin_only: false,
        }
    }
}

/// Default page and class name
pub fn default_page_name() -> String {
    "GeneratedPage".to_string()
}

/// A navigation path label: either flat text or (possibly nested) fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathLabel {
    Text(String),
    Parts(Vec<PathLabel>),
}

impl Default for PathLabel {
    fn default() -> Self {
        PathLabel::Text(String::new())
    }
}

impl From<&str> for PathLabel {
    fn from(text: &str) -> Self {
        PathLabel::Text(text.to_string())
    }
}

impl From<Vec<&str>> for PathLabel {
    fn from(parts: Vec<&str>) -> Self {
        PathLabel::Parts(parts.into_iter().map(PathLabel::from).collect())
    }
}

impl PathLabel {
    /// Depth-first list of the text fragments.
    pub fn fragments(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fragments(&mut out);
        out
    }

    fn collect_fragments<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            PathLabel::Text(text) => out.push(text),
            PathLabel::Parts(parts) => {
                for part in parts {
                    part.collect_fragments(out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub description: String,

    #[serde(rename = "expectedURL", default)]
    pub expected_url: Option<String>,

    #[serde(rename = "expectedTitle", default)]
    pub expected_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub description: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub data_test_id: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "expectedURL", default)]
    pub expected_url: Option<String>,

    #[serde(default)]
    pub expected_title: Option<String>,
}

/// An input, select or textarea that can be addressed by id or test id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub description: String,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub data_test_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub placeholder: Option<String>,

    #[serde(rename = "type", default)]
    pub field_type: String,

    #[serde(default)]
    pub fallback_selector: Option<String>,
}

/// Iframe that hosts report dialogs.
pub const REPORT_IFRAME: &str = "#lkDialogFrame";

/// A report link opened on demand in a dialog iframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub link_id: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Always null when extracted
    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "interceptedURL", default)]
    pub intercepted_url: String,

    #[serde(default = "default_report_iframe")]
    pub expected_iframe: String,
}

fn default_report_iframe() -> String {
    REPORT_IFRAME.to_string()
}

impl Report {
    pub fn new(link_id: &str, title: Option<String>) -> Self {
        Self {
            link_id: link_id.to_string(),
            title,
            description: None,
            intercepted_url: format!("aLinkId={}", link_id),
            expected_iframe: default_report_iframe(),
        }
    }
}

/// Generated helper-class source plus where it is meant to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCode {
    pub class_name: String,
    pub file_name: String,
    pub code: String,
    pub path: PathBuf,

    /// Report keys emitted into the class, in table order
    pub reports: Vec<ReportBinding>,
}

/// Ties a report table key to its convenience method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBinding {
    pub key: String,
    pub method: String,
    pub link_id: String,
}

impl RenderedCode {
    /// Looks up a report by table key.
    ///
    /// An unknown key means the caller and the generated class disagree, so
    /// it is reported instead of ignored.
    pub fn report(&self, key: &str) -> Result<&ReportBinding, Error> {
        self.reports
            .iter()
            .find(|binding| binding.key == key)
            .ok_or_else(|| Error::UnknownReportKey(key.to_string()))
    }
}
