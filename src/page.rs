//! カタログページ
//!
//! グループごとの検索フィルタ・結果コンテナと、共有プレビューを束ねる。
//! ホスト（ブラウザ書き出し・TUI）は `PageEvent` を `dispatch` に渡すだけで、
//! 1 イベントずつ最後まで処理される。

use crate::catalog::CatalogStore;
use crate::preview::{Key, PreviewController};
use crate::render::{render, Container};
use crate::search::SearchFilter;

/// グループキーから検索入力 ID を生成
pub fn search_input_id(key: &str) -> String {
    format!("search-{key}")
}

/// グループキーから結果コンテナ ID を生成
pub fn container_id(key: &str) -> String {
    format!("{key}-list")
}

// ============================================================================
// PageEvent（ページへのイベント）
// ============================================================================

/// ページへのイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// 初回描画
    Ready,
    /// 検索入力の変更
    InputChanged { group: String, text: String },
    /// カードのプレビュー操作
    CardActivated { group: String, index: usize },
    /// 閉じるボタン
    CloseActivated,
    /// 背景クリック
    BackdropActivated,
    /// キー入力
    KeyPressed(Key),
}

// ============================================================================
// GroupView（1 グループ分の表示）
// ============================================================================

/// 1 グループ分の検索フィルタとコンテナ
#[derive(Debug, Clone)]
pub struct GroupView {
    key: String,
    label: String,
    pub filter: SearchFilter,
    pub container: Container,
}

impl GroupView {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// ============================================================================
// CatalogPage
// ============================================================================

/// カタログページ全体の状態
#[derive(Debug)]
pub struct CatalogPage {
    title: String,
    groups: Vec<GroupView>,
    preview: PreviewController,
}

impl CatalogPage {
    /// ストアからページを構築（描画は `PageEvent::Ready` で行う）
    pub fn new(store: &CatalogStore) -> Self {
        let groups = store
            .groups()
            .iter()
            .map(|g| GroupView {
                key: g.key().to_string(),
                label: g.label().to_string(),
                filter: SearchFilter::new(
                    search_input_id(g.key()),
                    container_id(g.key()),
                    g.entries().to_vec(),
                ),
                container: Container::new(container_id(g.key())),
            })
            .collect();

        Self {
            title: store.title().to_string(),
            groups,
            preview: PreviewController::new(),
        }
    }

    /// 構築して初回描画まで済ませる
    pub fn ready(store: &CatalogStore) -> Self {
        let mut page = Self::new(store);
        page.dispatch(PageEvent::Ready);
        page
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn groups(&self) -> &[GroupView] {
        &self.groups
    }

    /// キーでグループ表示を検索
    pub fn group(&self, key: &str) -> Option<&GroupView> {
        self.groups.iter().find(|g| g.key == key)
    }

    fn group_mut(&mut self, key: &str) -> Option<&mut GroupView> {
        self.groups.iter_mut().find(|g| g.key == key)
    }

    pub fn preview(&self) -> &PreviewController {
        &self.preview
    }

    /// イベントを処理
    pub fn dispatch(&mut self, event: PageEvent) {
        match event {
            PageEvent::Ready => {
                for group in &mut self.groups {
                    render(&mut group.container, group.filter.original());
                }
                tracing::debug!(groups = self.groups.len(), "page rendered");
            }
            PageEvent::InputChanged { group, text } => match self.group_mut(&group) {
                Some(view) => view.filter.on_input(&text, &mut view.container),
                None => tracing::debug!(group = %group, "input for unknown group ignored"),
            },
            PageEvent::CardActivated { group, index } => {
                let file = self
                    .group(&group)
                    .and_then(|view| view.container.activate(index));
                match file {
                    Some(file) => self.preview.open(&file),
                    None => tracing::debug!(group = %group, index, "activation ignored"),
                }
            }
            PageEvent::CloseActivated | PageEvent::BackdropActivated => self.preview.close(),
            PageEvent::KeyPressed(key) => {
                self.preview.handle_key(key);
            }
        }
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
