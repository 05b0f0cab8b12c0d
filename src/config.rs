use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::extract::ExtractOptions;
use crate::model::{PathLabel, default_page_name};
use crate::render::{RenderOptions, TargetLanguage};

/// Configuration for a generation run
///
/// Everything the extractor and renderer need from outside is passed in
/// through this struct; nothing in the library reads the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Base root stripped from every extracted URL
    #[serde(default)]
    pub base_url: String,

    /// Output language selector (`js` or `ts`)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Directory the generated class is meant to be written to
    #[serde(default = "default_code_out_dir")]
    pub code_out_dir: String,

    /// Per-page values used when the caller does not supply them
    #[serde(default)]
    pub page: PageDefaults,
}

/// Page metadata defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDefaults {
    #[serde(default = "default_page_name")]
    pub name: String,

    #[serde(default)]
    pub path_label: PathLabel,

    #[serde(default)]
    pub admin_only: bool,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            name: default_page_name(),
            path_label: PathLabel::default(),
            admin_only: false,
        }
    }
}

/// Default value for lang
fn default_lang() -> String {
    "js".to_string()
}

/// Default value for code_out_dir
fn default_code_out_dir() -> String {
    "cypress/support/PageObjects".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            lang: default_lang(),
            code_out_dir: default_code_out_dir(),
            page: PageDefaults::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ::log::debug!("Loaded configuration from {}", path.display());
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }

    /// Extraction options seeded from this configuration
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new(&self.page.name)
            .with_base_url(&self.base_url)
            .with_path_label(self.page.path_label.clone())
            .with_admin_only(self.page.admin_only)
    }

    /// Render options seeded from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_language(TargetLanguage::from_selector(&self.lang))
            .with_output_directory(&self.code_out_dir)
    }
}
