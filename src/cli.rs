use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, build, init, list};

#[derive(Debug, Parser)]
#[command(name = "notecat")]
#[command(about = "Document catalog with per-group search and preview", long_about = None)]
pub struct Cli {
    /// Catalog file (.toml, .json, .yaml). Defaults to $NOTECAT_CATALOG or ./catalog.toml
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging (NOTECAT_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログファイルを作成
    #[command(
        long_about = "Create a catalog file from the built-in sample or by scanning a directory of documents."
    )]
    Init(init::Args),

    /// エントリ一覧を表示
    #[command(long_about = "List catalog entries, optionally filtered by group and search query.")]
    List(list::Args),

    /// 静的 HTML ページを書き出す
    #[command(
        long_about = "Render the catalog as a static HTML page with per-group search and a document preview overlay."
    )]
    Build(build::Args),

    /// 対話的に閲覧
    #[command(long_about = "Browse the catalog interactively in the terminal.")]
    Browse(browse::Args),
}
