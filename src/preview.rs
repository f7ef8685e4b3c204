//! プレビューオーバーレイの状態管理
//!
//! ページ全体で 1 つだけ存在するオーバーレイを `PreviewController` が所有する。
//! 状態は `Closed`（初期）と `Open(file)` の 2 つ。

/// プレビュー状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Closed,
    Open { file: String },
}

impl PreviewState {
    pub fn is_open(&self) -> bool {
        matches!(self, PreviewState::Open { .. })
    }

    /// 開いているファイル参照
    pub fn file(&self) -> Option<&str> {
        match self {
            PreviewState::Open { file } => Some(file),
            PreviewState::Closed => None,
        }
    }
}

/// オーバーレイ内のフォーカス対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    CloseButton,
}

/// オーバーレイの表示要素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// 埋め込みビューアの参照先（閉じたら空文字列）
    pub viewer_src: String,
    /// オーバーレイ内ダウンロードリンクの参照先
    pub download_href: String,
    /// ダウンロード属性が付いているか
    pub download_attr: bool,
    /// 支援技術向けの非表示属性（`aria-hidden`）
    pub aria_hidden: bool,
    pub focus: Option<FocusTarget>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            viewer_src: String::new(),
            download_href: String::new(),
            download_attr: false,
            aria_hidden: true,
            focus: None,
        }
    }
}

/// キー入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// 単一のプレビューオーバーレイを管理する
#[derive(Debug, Default)]
pub struct PreviewController {
    state: PreviewState,
    overlay: Overlay,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の状態
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// ファイルを開く（開いている場合は置き換える）
    pub fn open(&mut self, file: &str) {
        tracing::debug!(file, replaced = self.state.is_open(), "preview opened");
        self.overlay.viewer_src = file.to_string();
        self.overlay.download_href = file.to_string();
        self.overlay.download_attr = true;
        self.overlay.aria_hidden = false;
        // キーボード・スクリーンリーダー利用者を閉じるボタンへ
        self.overlay.focus = Some(FocusTarget::CloseButton);
        self.state = PreviewState::Open {
            file: file.to_string(),
        };
    }

    /// 閉じる
    ///
    /// ビューアの参照先は必ず空にする（読み込み中の文書を止めるため）。
    pub fn close(&mut self) {
        if self.state.is_open() {
            tracing::debug!("preview closed");
        }
        self.overlay.aria_hidden = true;
        self.overlay.viewer_src.clear();
        self.overlay.focus = None;
        self.state = PreviewState::Closed;
    }

    /// キー入力を処理（開いているときの Escape のみ閉じる）
    ///
    /// 閉じた場合は `true`。
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && !self.overlay.aria_hidden {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
