//! notecat browse コマンド
//!
//! カタログをターミナル上で対話的に閲覧する。

use clap::Parser;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {}

pub fn run(_args: Args, catalog_path: Option<&Path>) -> Result<(), String> {
    let loaded = super::load_catalog(catalog_path)?;
    tracing::debug!(path = %loaded.path.display(), "starting browser");

    crate::tui::run(&loaded).map_err(|e| format!("TUI error: {}", e))
}
