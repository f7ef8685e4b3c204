use crate::catalog::{self, LoadedCatalog};
use crate::cli::{Cli, Command};
use std::path::Path;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Command::Init(args) => init::run(args, catalog_path),
        Command::List(args) => list::run(args, catalog_path),
        Command::Build(args) => build::run(args, catalog_path),
        Command::Browse(args) => browse::run(args, catalog_path),
    }
}

/// カタログを読み込む（エラーは表示用文字列に変換）
fn load_catalog(path: Option<&Path>) -> Result<LoadedCatalog, String> {
    catalog::load(path).map_err(|e| e.to_string())
}

pub mod browse;
pub mod build;
pub mod init;
pub mod list;
