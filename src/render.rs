//! カード一覧の描画
//!
//! グループのコンテナ内容を毎回まるごと置き換える。
//! プレビュー操作はカード単位ではなくコンテナ単位で受け取り、
//! カードの `data-file` 属性を読んで元のファイル参照を復元する。

use crate::catalog::Entry;
use crate::sanitize::{decode_file_ref, encode_file_ref, escape};

/// エントリが無いときの表示
pub const EMPTY_STATE_MESSAGE: &str = "No notes added yet.";

// ============================================================================
// Card（1 エントリ分の表示）
// ============================================================================

/// カード（エスケープ済みの表示値と属性値を保持）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    title_html: String,
    desc_html: String,
    /// プレビューボタンの `data-file`（エンコード済み）
    data_file: String,
    /// ダウンロードリンクの `href`（属性用にエスケープ済み）
    download_href: String,
}

impl Card {
    /// エントリからカードを生成
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title_html: escape(entry.title()),
            desc_html: escape(entry.desc()),
            data_file: encode_file_ref(entry.file()),
            download_href: escape(entry.file()),
        }
    }

    pub fn title_html(&self) -> &str {
        &self.title_html
    }

    pub fn desc_html(&self) -> &str {
        &self.desc_html
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    pub fn download_href(&self) -> &str {
        &self.download_href
    }

    /// カードのマークアップ
    pub fn to_html(&self) -> String {
        format!(
            r#"<article class="note-card">
  <div>
    <div class="note-title">{title}</div>
    <div class="note-desc">{desc}</div>
  </div>
  <div class="note-actions">
    <button type="button" class="btn btn-primary small" data-file="{data_file}" aria-label="Preview {title}">Preview</button>
    <a class="btn btn-ghost small" href="{href}" target="_blank" rel="noopener" download>Download</a>
  </div>
</article>"#,
            title = self.title_html,
            desc = self.desc_html,
            data_file = self.data_file,
            href = self.download_href,
        )
    }
}

// ============================================================================
// Content / Container（グループごとの表示領域）
// ============================================================================

/// コンテナの表示内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// 初回描画前
    #[default]
    Blank,
    /// 空状態メッセージ
    EmptyState,
    /// カード一覧
    Cards(Vec<Card>),
}

impl Content {
    pub fn to_html(&self) -> String {
        match self {
            Content::Blank => String::new(),
            Content::EmptyState => format!("<p>{EMPTY_STATE_MESSAGE}</p>"),
            Content::Cards(cards) => cards
                .iter()
                .map(Card::to_html)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// グループの結果表示コンテナ
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    content: Content,
    /// 現在表示中のエントリ（カードと同順）
    shown: Vec<Entry>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Content::Blank,
            shown: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// 表示中のカード（空状態なら空スライス）
    pub fn cards(&self) -> &[Card] {
        match &self.content {
            Content::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// 表示中のエントリ
    pub fn shown(&self) -> &[Entry] {
        &self.shown
    }

    /// 空状態メッセージを表示しているか
    pub fn is_empty_state(&self) -> bool {
        self.content == Content::EmptyState
    }

    pub fn to_html(&self) -> String {
        self.content.to_html()
    }

    /// コンテナ単位のプレビュー操作
    ///
    /// `index` 番目のカードの `data-file` をデコードしてファイル参照を返す。
    /// 範囲外やデコード不能な属性は `None`。
    pub fn activate(&self, index: usize) -> Option<String> {
        let card = self.cards().get(index)?;
        match decode_file_ref(card.data_file()) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(container = %self.id, index, "{e}");
                None
            }
        }
    }
}

/// エントリ列でコンテナの内容を置き換える
///
/// 空なら空状態メッセージのみを表示し、カードは生成しない。
pub fn render<'a, I>(container: &mut Container, entries: I)
where
    I: IntoIterator<Item = &'a Entry>,
{
    let shown: Vec<Entry> = entries.into_iter().cloned().collect();
    container.content = if shown.is_empty() {
        Content::EmptyState
    } else {
        Content::Cards(shown.iter().map(Card::from_entry).collect())
    };
    container.shown = shown;

    tracing::trace!(
        container = %container.id,
        cards = container.cards().len(),
        "container rendered"
    );
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
