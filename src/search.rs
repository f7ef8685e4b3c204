//! グループ単位の検索フィルタ
//!
//! 入力が変わるたびに、保持している元のエントリ列から絞り込みを再計算する。
//! 表示中（絞り込み済み）の一覧から再計算することはない。

use crate::catalog::Entry;
use crate::render::{render, Container};

/// 入力テキストを検索クエリに正規化（前後空白除去 + 小文字化）
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// クエリでエントリを絞り込む
///
/// - 正規化済みクエリが空なら全件
/// - `title + " " + desc` の小文字化に対する部分一致
/// - 元の順序を保つ
pub fn filter_entries<'a>(entries: &'a [Entry], text: &str) -> Vec<&'a Entry> {
    let query = normalize_query(text);
    entries
        .iter()
        .filter(|e| e.haystack().contains(&query))
        .collect()
}

/// 1 グループ分の検索入力とその元データ
#[derive(Debug, Clone)]
pub struct SearchFilter {
    input_id: String,
    container_id: String,
    original: Vec<Entry>,
    /// 入力欄の現在値
    value: String,
}

impl SearchFilter {
    /// 元のエントリ列を取り込んでフィルタを作成
    pub fn new(
        input_id: impl Into<String>,
        container_id: impl Into<String>,
        original: Vec<Entry>,
    ) -> Self {
        Self {
            input_id: input_id.into(),
            container_id: container_id.into(),
            original,
            value: String::new(),
        }
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// 入力欄の現在値
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 絞り込み前のエントリ列
    pub fn original(&self) -> &[Entry] {
        &self.original
    }

    /// 現在値での絞り込み結果
    pub fn filtered(&self) -> Vec<&Entry> {
        filter_entries(&self.original, &self.value)
    }

    /// 入力変更を受けて再計算し、コンテナを再描画する
    pub fn on_input(&mut self, text: &str, container: &mut Container) {
        self.value = text.to_string();
        let filtered = self.filtered();
        tracing::debug!(
            input = %self.input_id,
            query = %normalize_query(text),
            matched = filtered.len(),
            total = self.original.len(),
            "search input changed"
        );
        render(container, filtered);
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
