use clap::{Parser, Subcommand};
use po_gen::model::PathLabel;
use po_gen::{ExtractOptions, GeneratorConfig, RenderOptions, TargetLanguage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "po-gen")]
#[command(about = "Generates Cypress page object classes from HTML snapshots")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the page object model and print it as JSON
    Extract {
        #[command(flatten)]
        page: PageArgs,

        /// Write the model to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract the model and write the generated class
    Generate {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render an existing JSON model
    Render {
        /// Model file produced by `extract`
        model: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct PageArgs {
    /// Saved HTML snapshot of the page
    pub html: PathBuf,

    /// Page (and class) name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Page URL, relative or absolute
    #[arg(long)]
    pub url: Option<String>,

    /// Location the snapshot was taken at, used when --url is empty
    #[arg(long)]
    pub location: Option<String>,

    /// Base root stripped from every URL
    #[arg(long, env = "PO_BASE_URL")]
    pub base_url: Option<String>,

    /// Navigation path label; repeat for multiple fragments
    #[arg(long)]
    pub path_label: Vec<String>,

    /// Page title; defaults to the document <title>
    #[arg(long)]
    pub title: Option<String>,

    /// Mark the page as admin only (`--admin-only=false` clears a config value)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub admin_only: Option<bool>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Target language (js, ts)
    #[arg(long, env = "PO_LANG")]
    pub lang: Option<String>,

    /// Output directory for the generated class
    #[arg(long, env = "PO_CODE_OUT_DIR")]
    pub out_dir: Option<PathBuf>,
}

impl PageArgs {
    /// Extraction options: flags first, then the configuration
    pub fn extract_options(&self, config: &GeneratorConfig, document_title: Option<String>) -> ExtractOptions {
        let mut options = config.extract_options();
        if let Some(name) = &self.name {
            options.name = name.clone();
        }
        if let Some(base_url) = &self.base_url {
            options = options.with_base_url(base_url);
        }
        if let Some(path_label) = convert_path_label(&self.path_label) {
            options = options.with_path_label(path_label);
        }
        if let Some(admin_only) = self.admin_only {
            options = options.with_admin_only(admin_only);
        }
        options
            .with_url(self.url.as_deref().unwrap_or(""))
            .with_title(self.title.clone().or(document_title))
    }
}

impl RenderArgs {
    /// Render options: flags first, then the configuration
    pub fn render_options(&self, config: &GeneratorConfig) -> RenderOptions {
        let mut options = config.render_options();
        if let Some(lang) = &self.lang {
            options = options.with_language(TargetLanguage::from_selector(lang));
        }
        if let Some(out_dir) = &self.out_dir {
            options = options.with_output_directory(out_dir);
        }
        options
    }
}

/// One flag value is a flat label, several are fragments
pub fn convert_path_label(values: &[String]) -> Option<PathLabel> {
    match values {
        [] => None,
        [single] => Some(PathLabel::Text(single.clone())),
        parts => Some(PathLabel::Parts(
            parts.iter().cloned().map(PathLabel::Text).collect(),
        )),
    }
}
