//! カタログブラウザの Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: ページ状態 + タブ・選択・フォーカス
//! - `Msg`: キー入力から変換されたメッセージ
//! - `update`: メッセージを `PageEvent` に変換してページへ渡す

use crate::catalog::LoadedCatalog;
use crate::page::{CatalogPage, GroupView, PageEvent};
use crate::preview::Key;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};

// ============================================================================
// Focus（入力フォーカス）
// ============================================================================

/// 入力フォーカス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
}

// ============================================================================
// DocumentInfo（プレビュー対象のローカル解決結果）
// ============================================================================

/// プレビュー対象ファイルの解決結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// カタログ位置を基準に解決したパス
    pub resolved: PathBuf,
    /// ファイルサイズ（見つからなければ None）
    pub size: Option<u64>,
}

/// ファイル参照をカタログ位置から解決する
///
/// URL はローカル解決しない。
pub fn document_info(base_dir: &Path, file: &str) -> Option<DocumentInfo> {
    if file.contains("://") {
        return None;
    }
    let resolved = base_dir.join(file);
    let size = std::fs::metadata(&resolved)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len());
    Some(DocumentInfo { resolved, size })
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次のグループへ
    NextTab,
    /// 前のグループへ
    PrevTab,
    Up,
    Down,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除（リストへ戻る）
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// 選択中カードのプレビュー
    Preview,
    /// プレビューの閉じるボタン
    ClosePreview,
    /// Escape キー
    Escape,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub page: CatalogPage,
    /// ファイル参照の解決基準
    pub base_dir: PathBuf,
    /// アクティブなグループのインデックス
    pub tab: usize,
    /// アクティブなグループでの選択状態
    pub state: ListState,
    pub focus: Focus,
    /// 開いているプレビューの解決結果
    pub document: Option<DocumentInfo>,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 読み込み済みカタログからモデルを作成
    pub fn new(loaded: &LoadedCatalog) -> Self {
        Self::with_page(
            CatalogPage::ready(&loaded.store),
            loaded.base_dir().to_path_buf(),
        )
    }

    /// ページから直接作成
    pub fn with_page(page: CatalogPage, base_dir: PathBuf) -> Self {
        let mut model = Self {
            page,
            base_dir,
            tab: 0,
            state: ListState::default(),
            focus: Focus::List,
            document: None,
            should_quit: false,
        };
        clamp_selection(&mut model);
        model
    }

    /// アクティブなグループ
    pub fn current_group(&self) -> Option<&GroupView> {
        self.page.groups().get(self.tab)
    }

    fn current_key(&self) -> Option<String> {
        self.current_group().map(|g| g.key().to_string())
    }

    fn shown_len(&self) -> usize {
        self.current_group()
            .map(|g| g.container.shown().len())
            .unwrap_or(0)
    }

    /// プレビューが開いているか
    pub fn preview_open(&self) -> bool {
        self.page.preview().state().is_open()
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.preview_open() {
            // オーバーレイ表示中はフォーカスが閉じるボタンにある
            return match key {
                KeyCode::Esc => Some(Msg::Escape),
                KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('x') => {
                    Some(Msg::ClosePreview)
                }
                _ => None,
            };
        }

        let search_empty = self
            .current_group()
            .map(|g| g.filter.value().is_empty())
            .unwrap_or(true);

        match self.focus {
            Focus::Search => match key {
                KeyCode::Esc if !search_empty => Some(Msg::SearchClear),
                KeyCode::Esc => Some(Msg::SearchUnfocus),
                KeyCode::Down | KeyCode::Enter => Some(Msg::SearchUnfocus),
                KeyCode::Tab => Some(Msg::NextTab),
                KeyCode::BackTab => Some(Msg::PrevTab),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            },
            Focus::List => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Enter | KeyCode::Char('p') => Some(Msg::Preview),
                KeyCode::Esc => Some(Msg::Escape),
                _ => None,
            },
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::NextTab => switch_tab(model, 1),
        Msg::PrevTab => switch_tab(model, -1),
        Msg::Up => {
            let i = model.state.selected().unwrap_or(0);
            if model.shown_len() > 0 {
                model.state.select(Some(i.saturating_sub(1)));
            }
        }
        Msg::Down => {
            let len = model.shown_len();
            if len > 0 {
                let i = model.state.selected().unwrap_or(0);
                model.state.select(Some((i + 1).min(len - 1)));
            }
        }
        Msg::SearchFocus => model.focus = Focus::Search,
        Msg::SearchUnfocus => model.focus = Focus::List,
        Msg::SearchInput(c) => edit_search(model, |text| text.push(c)),
        Msg::SearchBackspace => edit_search(model, |text| {
            text.pop();
        }),
        Msg::SearchClear => edit_search(model, String::clear),
        Msg::Preview => {
            if let (Some(group), Some(index)) = (model.current_key(), model.state.selected()) {
                model.page.dispatch(PageEvent::CardActivated { group, index });
                sync_document(model);
            }
        }
        Msg::ClosePreview => {
            model.page.dispatch(PageEvent::CloseActivated);
            sync_document(model);
        }
        Msg::Escape => {
            model.page.dispatch(PageEvent::KeyPressed(Key::Escape));
            sync_document(model);
        }
    }
}

/// 検索欄を編集して入力変更イベントを送る
fn edit_search(model: &mut Model, edit: impl FnOnce(&mut String)) {
    let Some(group) = model.current_group() else {
        return;
    };
    let key = group.key().to_string();
    let mut text = group.filter.value().to_string();
    edit(&mut text);

    model
        .page
        .dispatch(PageEvent::InputChanged { group: key, text });
    clamp_selection(model);
}

/// グループを切り替え（各グループの検索値はページ側に残る）
fn switch_tab(model: &mut Model, step: isize) {
    let count = model.page.groups().len();
    if count == 0 {
        return;
    }
    model.tab = (model.tab as isize + step).rem_euclid(count as isize) as usize;
    model.focus = Focus::List;
    model.state = ListState::default();
    clamp_selection(model);
}

/// 表示件数に合わせて選択位置を整合させる
fn clamp_selection(model: &mut Model) {
    let len = model.shown_len();
    if len == 0 {
        model.state.select(None);
    } else {
        let i = model.state.selected().unwrap_or(0).min(len - 1);
        model.state.select(Some(i));
    }
}

/// プレビュー状態に合わせてファイル解決結果を更新
fn sync_document(model: &mut Model) {
    model.document = model
        .page
        .preview()
        .state()
        .file()
        .and_then(|file| document_info(&model.base_dir, file));
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
