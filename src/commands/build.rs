//! notecat build コマンド
//!
//! カタログを静的 HTML ページとして書き出す。

use crate::catalog::LoadedCatalog;
use crate::output::CommandSummary;
use crate::page::CatalogPage;
use crate::site::{render_site, SiteOptions};
use chrono::Datelike;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// Year shown in the footer (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
}

pub fn run(args: Args, catalog_path: Option<&Path>) -> Result<(), String> {
    let loaded = super::load_catalog(catalog_path)?;

    for file in missing_files(&loaded) {
        tracing::warn!(file = %file, "document not found next to catalog");
    }

    let options = SiteOptions {
        year: args.year.unwrap_or_else(|| chrono::Local::now().year()),
    };
    let page = CatalogPage::ready(&loaded.store);
    let html = render_site(&page, &options).map_err(|e| e.to_string())?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory: {}", e))?;
    }
    std::fs::write(&args.output, html).map_err(|e| format!("Failed to write file: {}", e))?;
    tracing::info!(path = %args.output.display(), "page written");

    CommandSummary::format(
        &args.output.display().to_string(),
        loaded.store.groups().len(),
        loaded.store.entry_count(),
    )
    .print();
    Ok(())
}

/// カタログ位置から解決できないローカルのファイル参照
///
/// URL（`scheme://`）と絶対パスは対象外。
fn missing_files(loaded: &LoadedCatalog) -> Vec<String> {
    let base = loaded.base_dir();
    loaded
        .store
        .groups()
        .iter()
        .flat_map(|g| g.entries())
        .map(|e| e.file())
        .filter(|file| !file.contains("://") && !Path::new(file).is_absolute())
        .filter(|file| !base.join(file).exists())
        .map(|file| file.to_string())
        .collect()
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
