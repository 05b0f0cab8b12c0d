use clap::Parser;
use po_gen::{
    Error, GeneratorConfig, PageObject, Snapshot, build_po_from_dom, render_po, to_json,
    write_rendered,
};
use std::fs;
use std::path::Path;

mod args;
use args::{Args, Command, PageArgs};

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ::log::error!("po-gen failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    match args.command {
        Command::Extract { page, output } => {
            let po = extract_page(&page, &config)?;
            let json = to_json(&po)?;
            match output {
                Some(path) => {
                    fs::write(&path, json).map_err(|source| Error::Io {
                        path: path.clone(),
                        source,
                    })?;
                    ::log::info!("Wrote model to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Generate { page, render } => {
            let po = extract_page(&page, &config)?;
            let rendered = render_po(&po, &render.render_options(&config));
            println!("{}", write_rendered(&rendered)?.display());
        }
        Command::Render { model, render } => {
            let po: PageObject = serde_json::from_str(&read_file(&model)?).map_err(Error::Json)?;
            ::log::info!("Rendering model {}", model.display());
            let rendered = render_po(&po, &render.render_options(&config));
            println!("{}", write_rendered(&rendered)?.display());
        }
    }

    Ok(())
}

fn extract_page(page: &PageArgs, config: &GeneratorConfig) -> Result<PageObject, Error> {
    ::log::info!("Extracting page object from {}", page.html.display());

    let mut snapshot = Snapshot::parse(&read_file(&page.html)?);
    if let Some(location) = &page.location {
        snapshot = snapshot.with_location(location);
    }

    let options = page.extract_options(config, snapshot.title());
    let po = build_po_from_dom(&snapshot, &options);
    ::log::info!(
        "Extracted {} breadcrumbs, {} buttons, {} form fields, {} reports",
        po.breadcrumbs.len(),
        po.buttons.len(),
        po.form_fields.len(),
        po.reports.len()
    );
    Ok(po)
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
