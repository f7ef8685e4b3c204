//! 静的 HTML ページの書き出し
//!
//! 初期表示（全グループ描画済み・プレビュー非表示）をサーバ側で生成し、
//! ブラウザ側の検索とプレビューは埋め込みスクリプトが担う。

use crate::catalog::Entry;
use crate::error::Result;
use crate::page::CatalogPage;
use crate::preview::Overlay;
use crate::sanitize::escape;
use serde::Serialize;

/// 書き出しオプション
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// フッターに表示する年
    pub year: i32,
}

/// 埋め込みデータ（グループキー → 元のエントリ列）
#[derive(Serialize)]
struct EmbeddedGroup<'a> {
    key: &'a str,
    entries: &'a [Entry],
}

/// ページ全体の HTML を生成
pub fn render_site(page: &CatalogPage, options: &SiteOptions) -> Result<String> {
    let title = escape(page.title());

    let sections = page
        .groups()
        .iter()
        .map(|g| {
            format!(
                r#"<section class="group" id="{key}">
  <div class="group-header">
    <h2>{label}</h2>
    <input type="search" id="{input_id}" class="search" placeholder="Search {label}..." aria-label="Search {label}">
  </div>
  <div id="{container_id}" class="notes-grid" data-group="{key}">
{content}
  </div>
</section>"#,
                key = g.key(),
                label = escape(g.label()),
                input_id = g.filter.input_id(),
                container_id = g.container.id(),
                content = g.container.to_html(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let embedded: Vec<EmbeddedGroup> = page
        .groups()
        .iter()
        .map(|g| EmbeddedGroup {
            key: g.key(),
            entries: g.filter.original(),
        })
        .collect();
    let data = embed_json(&serde_json::to_string(&embedded)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{CSS}</style>
</head>
<body>
<header class="site-header"><h1>{title}</h1></header>
<main>
{sections}
</main>
{overlay}
<footer class="site-footer">&copy; <span id="year">{year}</span> {title}</footer>
<script id="catalog-data" type="application/json">{data}</script>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        overlay = overlay_html(page.preview().overlay()),
        year = options.year,
    ))
}

/// プレビューオーバーレイの HTML
pub fn overlay_html(overlay: &Overlay) -> String {
    let download_attr = if overlay.download_attr {
        " download"
    } else {
        ""
    };
    format!(
        r##"<div id="pdf-modal" class="modal" role="dialog" aria-modal="true" aria-label="Document preview" aria-hidden="{hidden}">
  <div id="modal-backdrop" class="modal-backdrop"></div>
  <div class="modal-panel">
    <div class="modal-toolbar">
      <a id="modal-download" class="btn btn-ghost small" href="{href}"{download_attr}>Download</a>
      <button type="button" id="modal-close" class="close-btn" aria-label="Close preview">&times;</button>
    </div>
    <iframe id="pdf-frame" title="Document preview" src="{src}"></iframe>
  </div>
</div>"##,
        hidden = overlay.aria_hidden,
        href = escape(&overlay.download_href),
        src = escape(&overlay.viewer_src),
    )
}

/// `<script>` 内に埋め込めるよう `< > &` を `\uXXXX` に置換する
///
/// JSON の構文上これらは文字列中にしか現れないため、値は変わらない。
/// `</script>` による終了も `<!--` によるスクリプトデータのエスケープ状態も起きない。
fn embed_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

/// ページスタイル
pub const CSS: &str = r#"
:root { --bg: #f7f7f8; --card: #fff; --text: #222; --muted: #666; --accent: #2563eb; --border: #ddd; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
.site-header, .site-footer { padding: 16px 24px; }
.site-footer { color: var(--muted); font-size: 0.9em; }
main { padding: 0 24px; }
.group { margin-bottom: 32px; }
.group-header { display: flex; align-items: center; justify-content: space-between; gap: 12px; }
.search { padding: 6px 10px; border: 1px solid var(--border); border-radius: 6px; min-width: 220px; }
.notes-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; }
.note-card { display: flex; flex-direction: column; gap: 8px; padding: 12px; background: var(--card); border: 1px solid var(--border); border-radius: 8px; min-height: 140px; }
.note-title { font-weight: 600; }
.note-desc { color: var(--muted); font-size: 0.9em; }
.note-actions { margin-top: auto; display: flex; gap: 8px; }
.btn { display: inline-block; padding: 4px 10px; border-radius: 6px; border: 1px solid var(--accent); cursor: pointer; text-decoration: none; font: inherit; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-ghost { background: transparent; color: var(--accent); }
.modal { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; }
.modal[aria-hidden="true"] { display: none; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); }
.modal-panel { position: relative; width: min(960px, 92vw); height: 88vh; background: var(--card); border-radius: 8px; display: flex; flex-direction: column; }
.modal-toolbar { display: flex; justify-content: flex-end; gap: 8px; padding: 8px; }
.close-btn { border: none; background: none; font-size: 1.5em; cursor: pointer; }
#pdf-frame { flex: 1; border: none; width: 100%; }
"#;

/// ブラウザ側の検索・プレビュー処理
///
/// コンテナ単位の委譲ハンドラで `data-file` を読み取る。
pub const SCRIPT: &str = r#"
(function () {
  "use strict";
  var EMPTY = "No notes added yet.";
  var groups = JSON.parse(document.getElementById("catalog-data").textContent);
  var modal = document.getElementById("pdf-modal");
  var frame = document.getElementById("pdf-frame");
  var download = document.getElementById("modal-download");
  var closeBtn = document.getElementById("modal-close");

  function escape(s) {
    return String(s || "").replace(/[&<>"']/g, function (c) {
      return { "&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;", "'": "&#39;" }[c];
    });
  }

  function render(container, entries) {
    if (!entries.length) {
      container.innerHTML = "<p>" + EMPTY + "</p>";
      return;
    }
    container.innerHTML = entries.map(function (e) {
      var t = escape(e.title);
      return '<article class="note-card"><div><div class="note-title">' + t +
        '</div><div class="note-desc">' + escape(e.desc) + '</div></div>' +
        '<div class="note-actions"><button type="button" class="btn btn-primary small" data-file="' +
        encodeURIComponent(e.file) + '" aria-label="Preview ' + t + '">Preview</button>' +
        '<a class="btn btn-ghost small" href="' + escape(e.file) +
        '" target="_blank" rel="noopener" download>Download</a></div></article>';
    }).join("\n");
  }

  function open(file) {
    frame.src = file;
    download.href = file;
    download.setAttribute("download", "");
    modal.setAttribute("aria-hidden", "false");
    closeBtn.focus();
  }

  function close() {
    modal.setAttribute("aria-hidden", "true");
    frame.src = "";
  }

  groups.forEach(function (g) {
    var container = document.getElementById(g.key + "-list");
    var input = document.getElementById("search-" + g.key);
    container.addEventListener("click", function (ev) {
      var btn = ev.target.closest("button[data-file]");
      if (btn && container.contains(btn)) open(decodeURIComponent(btn.getAttribute("data-file")));
    });
    input.addEventListener("input", function () {
      var q = input.value.trim().toLowerCase();
      render(container, g.entries.filter(function (e) {
        return (e.title + " " + (e.desc || "")).toLowerCase().indexOf(q) !== -1;
      }));
    });
  });

  closeBtn.addEventListener("click", close);
  document.getElementById("modal-backdrop").addEventListener("click", close);
  document.addEventListener("keydown", function (e) {
    if (e.key === "Escape" && modal.getAttribute("aria-hidden") === "false") close();
  });
})();
"#;

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
