//! notecat init コマンド
//!
//! サンプルカタログ、またはディレクトリ走査結果をカタログファイルに書き出す。

use crate::catalog::config::{self, CatalogFormat};
use crate::catalog::scan::{self, DEFAULT_PATTERN};
use crate::catalog::CatalogStore;
use crate::error::{NotecatError, Result};
use crate::output::CommandSummary;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(after_help = "SOURCES:
  (default)         Built-in sample catalog with three semesters
  --from-dir DIR    Each subdirectory of DIR becomes a group,
                    each matching file becomes an entry")]
pub struct Args {
    /// Output file (defaults to --catalog or ./catalog.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Build the catalog by scanning a directory of documents
    #[arg(long)]
    pub from_dir: Option<PathBuf>,

    /// File name pattern used with --from-dir
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Page title used with --from-dir
    #[arg(long, default_value = "Notes")]
    pub title: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: Args, catalog_path: Option<&Path>) -> std::result::Result<(), String> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config::resolve_path(catalog_path));

    let store = build_store(&args).map_err(|e| e.to_string())?;
    write_catalog(&store, &output, args.force).map_err(|e| e.to_string())?;

    CommandSummary::format(
        &output.display().to_string(),
        store.groups().len(),
        store.entry_count(),
    )
    .print();
    Ok(())
}

fn build_store(args: &Args) -> Result<CatalogStore> {
    match &args.from_dir {
        Some(dir) => scan::from_dir(dir, &args.pattern, &args.title),
        None => config::sample(),
    }
}

/// カタログを出力先の拡張子に応じた形式で書き出す
fn write_catalog(store: &CatalogStore, output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        return Err(NotecatError::AlreadyExists(output.to_path_buf()));
    }
    let format = CatalogFormat::from_path(output)?;
    let text = config::serialize(store, format)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, text)?;

    tracing::info!(path = %output.display(), "catalog written");
    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
