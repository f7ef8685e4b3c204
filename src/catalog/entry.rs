//! カタログエントリとグループ

use serde::{Deserialize, Serialize};

/// カタログの 1 項目（タイトル・ファイル参照・説明）
///
/// 構築後は変更しない。フィルタ結果にはコピーまたは参照として渡す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    title: String,
    file: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    desc: String,
}

impl Entry {
    /// 新しいエントリを作成（説明なし）
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: file.into(),
            desc: String::new(),
        }
    }

    /// 説明を設定
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// ドキュメントへの相対参照
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 説明（未指定は空文字列）
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// 検索対象テキスト（`title + " " + desc` の小文字化）
    pub fn haystack(&self) -> String {
        format!("{} {}", self.title, self.desc).to_lowercase()
    }
}

/// 名前付きのエントリ列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl Group {
    pub fn new(key: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            key: key.into(),
            label: None,
            entries,
        }
    }

    /// 表示名を設定
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 表示名（未指定ならキー）
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    /// 表示順のエントリ列
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
