//! カタログファイルの読み込み
//!
//! 拡張子で形式を判定する（`.toml` / `.json` / `.yaml` / `.yml`）。
//! 解決順序: `--catalog` 引数 > `NOTECAT_CATALOG` 環境変数 > `./catalog.toml`

use super::entry::{Entry, Group};
use super::store::CatalogStore;
use crate::env::EnvVar;
use crate::error::{NotecatError, Result};
use std::path::{Path, PathBuf};

/// カタログパスを指定する環境変数
pub const CATALOG_ENV: &str = "NOTECAT_CATALOG";

/// 既定のカタログファイル名
pub const DEFAULT_CATALOG_FILE: &str = "catalog.toml";

/// カタログファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
    Yaml,
}

impl CatalogFormat {
    /// パスの拡張子から形式を判定（拡張子なしは TOML）
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(CatalogFormat::Toml),
            Some(ext) => match ext.to_ascii_lowercase().as_str() {
                "toml" => Ok(CatalogFormat::Toml),
                "json" => Ok(CatalogFormat::Json),
                "yaml" | "yml" => Ok(CatalogFormat::Yaml),
                other => Err(NotecatError::UnsupportedFormat(other.to_string())),
            },
        }
    }
}

/// 読み込み済みカタログとその配置場所
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub store: CatalogStore,
    /// カタログファイル
    pub path: PathBuf,
}

impl LoadedCatalog {
    /// ファイル参照の解決基準ディレクトリ（カタログファイルの親）
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

/// カタログパスを解決
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    EnvVar::get(CATALOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
}

/// 解決済みパスからカタログを読み込む
pub fn load(explicit: Option<&Path>) -> Result<LoadedCatalog> {
    let path = resolve_path(explicit);
    let store = load_from(&path)?;
    Ok(LoadedCatalog { store, path })
}

/// 指定パスからカタログを読み込む
pub fn load_from(path: &Path) -> Result<CatalogStore> {
    if !path.exists() {
        return Err(NotecatError::CatalogNotFound(path.to_path_buf()));
    }
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let store = parse(&content, format)?;

    tracing::debug!(
        path = %path.display(),
        groups = store.groups().len(),
        entries = store.entry_count(),
        "catalog loaded"
    );
    Ok(store)
}

/// 文字列からカタログをパースし検証する
pub fn parse(content: &str, format: CatalogFormat) -> Result<CatalogStore> {
    let store: CatalogStore = match format {
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };
    store.validate()?;
    Ok(store)
}

/// カタログを指定形式の文字列に変換
pub fn serialize(store: &CatalogStore, format: CatalogFormat) -> Result<String> {
    let text = match format {
        CatalogFormat::Toml => toml::to_string_pretty(store)?,
        CatalogFormat::Json => serde_json::to_string_pretty(store)?,
        CatalogFormat::Yaml => serde_yaml::to_string(store)?,
    };
    Ok(text)
}

/// `notecat init` が書き出すサンプルカタログ
pub fn sample() -> Result<CatalogStore> {
    let groups = vec![
        Group::new(
            "sem1",
            vec![Entry::new("dbms", "pdfs/dbms_notes.pdf")
                .with_desc("Basics of C and program structure.")],
        )
        .with_label("Semester 1"),
        Group::new(
            "sem2",
            vec![Entry::new("dsa", "pdfs/dsa_notes.pdf").with_desc("Arrays, linked lists, trees.")],
        )
        .with_label("Semester 2"),
        Group::new(
            "sem3",
            vec![Entry::new("Data science", "pdfs/data_science_notes.pdf")
                .with_desc("Processes, scheduling, memory.")],
        )
        .with_label("Semester 3"),
    ];
    CatalogStore::new("Semester Notes", groups)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
