pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types for convenience
pub use config::GeneratorConfig;
pub use dom::Snapshot;
pub use error::{Error, Result};
pub use extract::{ExtractOptions, build_po_from_dom};
pub use model::{PageObject, RenderedCode};
pub use render::{RenderOptions, TargetLanguage, render_po};

use std::fs;
use std::path::Path;

/// Writes `rendered.code` to `rendered.path`, creating parent directories.
pub fn write_rendered(rendered: &RenderedCode) -> Result<&Path> {
    let path = rendered.path.as_path();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, &rendered.code).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ::log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Serializes a page object as pretty-printed JSON.
pub fn to_json(po: &PageObject) -> Result<String> {
    Ok(serde_json::to_string_pretty(po)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_write_rendered_creates_directories() {
        let dir = std::env::temp_dir().join(format!("po-gen-write-{}", std::process::id()));
        let options = RenderOptions::new().with_output_directory(dir.join("nested"));
        let rendered = render_po(&PageObject::default(), &options);

        let written = write_rendered(&rendered).unwrap();
        assert_eq!(written, dir.join("nested").join("GeneratedPage.js").as_path());
        assert_eq!(fs::read_to_string(written).unwrap(), rendered.code);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_rendered_reports_path_on_failure() {
        let file = std::env::temp_dir().join(format!("po-gen-blocker-{}", std::process::id()));
        fs::write(&file, "not a directory").unwrap();

        let options = RenderOptions::new().with_output_directory(file.join("sub"));
        let rendered = render_po(&PageObject::default(), &options);

        match write_rendered(&rendered) {
            Err(Error::Io { path, .. }) => assert_eq!(path, PathBuf::from(file.join("sub"))),
            other => panic!("expected an I/O error, got {:?}", other),
        }
        fs::remove_file(&file).unwrap();
    }

    #[test]
    fn test_extract_then_render() {
        let snapshot = Snapshot::parse(
            r#"<html><head><title>ACME | Reports</title></head><body>
                <button data-testid="npsearch">Search All</button>
            </body></html>"#,
        )
        .with_location("https://host.example/MOEIL/reports/list");
        let options = ExtractOptions::new("Reports")
            .with_base_url("https://host.example/MOEIL")
            .with_title(snapshot.title());

        let po = build_po_from_dom(&snapshot, &options);
        assert_eq!(po.page.url, "reports/list");

        let rendered = render_po(&po, &RenderOptions::new());
        assert!(rendered.code.contains(r#"static PageTitle = "Reports";"#));
        assert!(rendered.code.contains(r#"SEARCH_ALL: { description: "Search All""#));

        let json = to_json(&po).unwrap();
        let back: PageObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, po);
    }
}
