//! ディレクトリからのカタログ生成
//!
//! 直下のサブディレクトリを 1 グループとし、パターンに一致するファイルを
//! エントリにする。ルート直下のファイルは `other` グループにまとめる。

use super::entry::{Entry, Group};
use super::store::CatalogStore;
use crate::error::Result;
use glob::Pattern;
use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path};
use walkdir::WalkDir;

/// ルート直下ファイルのグループキー
pub const OTHER_GROUP_KEY: &str = "other";

/// 既定のファイルパターン
pub const DEFAULT_PATTERN: &str = "*.pdf";

/// ディレクトリを走査してカタログを構築
///
/// ファイル参照は `dir` を先頭に付けた `/` 区切りのパスになる。
pub fn from_dir(dir: &Path, pattern: &str, title: &str) -> Result<CatalogStore> {
    let pattern = Pattern::new(pattern)?;
    // サブディレクトリ名 → エントリ列（名前順）
    let mut grouped: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    let mut other = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(&e.file_name().to_string_lossy()));

    for item in walker {
        let item = item?;
        if !item.file_type().is_file() {
            continue;
        }
        let name = item.file_name().to_string_lossy();
        if !pattern.matches(&name) {
            continue;
        }

        let relative = item.path().strip_prefix(dir).unwrap_or(item.path());
        let entry = Entry::new(file_title(item.path()), to_file_ref(item.path()));

        let mut components = relative.components();
        let first = components.next();
        match (first, components.next()) {
            (Some(group_dir), Some(_)) => {
                let group_name = group_dir.as_os_str().to_string_lossy().into_owned();
                grouped.entry(group_name).or_default().push(entry);
            }
            _ => other.push(entry),
        }
    }

    let mut used = HashSet::new();
    let mut groups: Vec<Group> = grouped
        .into_iter()
        .map(|(name, entries)| {
            let key = unique_key(&mut used, to_group_key(&name));
            Group::new(key, entries).with_label(name)
        })
        .collect();
    if !other.is_empty() {
        let key = unique_key(&mut used, OTHER_GROUP_KEY.to_string());
        groups.push(Group::new(key, other).with_label("Other"));
    }

    tracing::debug!(dir = %dir.display(), groups = groups.len(), "directory scanned");
    CatalogStore::new(title, groups)
}

/// 使用済みのキーと重ならないよう `-2`, `-3`, ... を付ける
fn unique_key(used: &mut HashSet<String>, base: String) -> String {
    let mut key = base.clone();
    let mut n = 2;
    while used.contains(&key) {
        key = format!("{base}-{n}");
        n += 1;
    }
    used.insert(key.clone());
    key
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// ファイル名（拡張子なし）をタイトルにする
fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

/// `/` 区切りのファイル参照に変換
fn to_file_ref(path: &Path) -> String {
    path.components()
        .map(|c| match c {
            Component::RootDir => String::new(),
            other => other.as_os_str().to_string_lossy().into_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// ディレクトリ名をグループキーに変換（許可外の文字は `-`）
pub fn to_group_key(name: &str) -> String {
    let key: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    if key.is_empty() {
        OTHER_GROUP_KEY.to_string()
    } else {
        key
    }
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
