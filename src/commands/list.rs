//! notecat list コマンド
//!
//! グループごとのエントリを表示する。`--query` は検索入力と同じ絞り込みを行う。

use crate::catalog::{CatalogStore, Entry};
use crate::error::NotecatError;
use crate::page::{CatalogPage, PageEvent};
use crate::render::EMPTY_STATE_MESSAGE;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(after_help = "OUTPUT FORMATS:
  (default)   Table of group, title, file and description
  --json      JSON array of entries
  --simple    Entry titles only, one per line")]
pub struct Args {
    /// Show only this group
    #[arg(long)]
    pub group: Option<String>,

    /// Case-insensitive substring search over title and description
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only entry titles
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// 出力用の 1 行
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct ListedEntry {
    group: String,
    #[serde(flatten)]
    entry: Entry,
}

pub fn run(args: Args, catalog_path: Option<&Path>) -> Result<(), String> {
    let loaded = super::load_catalog(catalog_path)?;
    let rows = collect_rows(&loaded.store, &args).map_err(|e| e.to_string())?;

    if args.json {
        print_json(&rows)?;
    } else if args.simple {
        print_simple(&rows);
    } else {
        print_table(&rows);
    }
    Ok(())
}

/// 対象グループの表示中エントリを集める
fn collect_rows(store: &CatalogStore, args: &Args) -> Result<Vec<ListedEntry>, NotecatError> {
    if let Some(key) = &args.group {
        if store.group(key).is_none() {
            return Err(NotecatError::GroupNotFound(key.clone()));
        }
    }

    let mut page = CatalogPage::ready(store);
    let keys: Vec<String> = page
        .groups()
        .iter()
        .map(|g| g.key().to_string())
        .filter(|k| args.group.as_ref().map_or(true, |g| g == k))
        .collect();

    let mut rows = Vec::new();
    for key in keys {
        if let Some(query) = &args.query {
            page.dispatch(PageEvent::InputChanged {
                group: key.clone(),
                text: query.clone(),
            });
        }
        if let Some(view) = page.group(&key) {
            rows.extend(view.container.shown().iter().map(|entry| ListedEntry {
                group: key.clone(),
                entry: entry.clone(),
            }));
        }
    }
    Ok(rows)
}

fn print_table(rows: &[ListedEntry]) {
    if rows.is_empty() {
        println!("{EMPTY_STATE_MESSAGE}");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Group", "Title", "File", "Description"]);

    for row in rows {
        let desc = if row.entry.desc().is_empty() {
            "-"
        } else {
            row.entry.desc()
        };
        table.add_row(vec![
            row.group.as_str(),
            row.entry.title(),
            row.entry.file(),
            desc,
        ]);
    }

    println!("{table}");
}

fn print_json(rows: &[ListedEntry]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(rows)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize entries: {}", e))
}

fn print_simple(rows: &[ListedEntry]) {
    if rows.is_empty() {
        println!("{EMPTY_STATE_MESSAGE}");
        return;
    }
    for row in rows {
        println!("{}", row.entry.title());
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
