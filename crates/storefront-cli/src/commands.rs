use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use storefront_core::Settings;
use storefront_model::Catalog;

use storefront_cli::script::{RunReport, parse_script, run_script};
use storefront_cli::summary::catalog_table;

use crate::cli::{CatalogArgs, RunArgs};

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    println!("{}", catalog_table(&catalog));
    println!("{} products", catalog.len());
    Ok(())
}

pub fn run_session(args: &RunArgs, settings_path: Option<&Path>) -> Result<RunReport> {
    let span = info_span!("session", script = %args.script.display());
    let _guard = span.enter();

    let settings = load_settings(settings_path)?;
    let catalog = load_catalog(&args.catalog)?;
    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let steps = parse_script(&content)
        .with_context(|| format!("parse script {}", args.script.display()))?;
    info!(steps = steps.len(), products = catalog.len(), "replaying session");

    Ok(run_script(Arc::new(catalog), settings, steps))
}

pub fn run_settings(settings_path: Option<&Path>) -> Result<()> {
    let settings = load_settings(settings_path)?;
    let rendered = settings.to_toml_string().context("render settings")?;
    print!("{rendered}");
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("load catalog {}", path.display()))
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path.map_or_else(Settings::config_path, Path::to_path_buf);
    Settings::load_or_default(&path).with_context(|| format!("load settings {}", path.display()))
}
