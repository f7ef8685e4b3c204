//! カタログストア
//!
//! 起動時に一度だけ構築される読み取り専用のグループ集合。
//! 実行中の追加・削除 API は持たない。

use super::entry::Group;
use crate::error::{NotecatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ページタイトルの既定値
pub const DEFAULT_TITLE: &str = "Notes";

/// グループキー → エントリ列の順序付きマッピング
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStore {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    groups: Vec<Group>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl CatalogStore {
    /// グループ列からストアを構築（キーを検証する）
    pub fn new(title: impl Into<String>, groups: Vec<Group>) -> Result<Self> {
        let store = Self {
            title: title.into(),
            groups,
        };
        store.validate()?;
        Ok(store)
    }

    /// グループキーの検証
    ///
    /// キーは要素 ID の一部になるため `[A-Za-z0-9_-]` のみ許可し、重複も禁止する。
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            validate_group_key(group.key())?;
            if !seen.insert(group.key()) {
                return Err(NotecatError::DuplicateGroupKey(group.key().to_string()));
            }
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 設定順のグループ一覧
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// キーでグループを検索
    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.key() == key)
    }

    /// 全エントリ数
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries().len()).sum()
    }
}

/// グループキーの文字種検証
pub fn validate_group_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(NotecatError::InvalidGroupKey(key.to_string()))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
