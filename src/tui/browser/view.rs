//! カタログブラウザの描画

use super::app::{DocumentInfo, Focus, Model};
use crate::page::GroupView;
use crate::preview::{FocusTarget, Overlay};
use crate::render::EMPTY_STATE_MESSAGE;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};

/// 画面中央のオーバーレイ領域を計算
fn overlay_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タイトル
            Constraint::Length(1), // タブバー
            Constraint::Length(3), // 検索欄
            Constraint::Min(1),    // カード一覧
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let title = Paragraph::new(format!(" {}", model.page.title()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    // タブバー
    let tab_titles: Vec<&str> = model.page.groups().iter().map(|g| g.label()).collect();
    let tabs = Tabs::new(tab_titles)
        .select(model.tab)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[1]);

    let Some(group) = model.page.groups().get(model.tab) else {
        let empty = Paragraph::new(EMPTY_STATE_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[3]);
        return;
    };

    view_search(f, group, model.focus, chunks[2]);
    view_cards(f, group, model, chunks[3]);

    let help_text = match model.focus {
        Focus::Search => " type to filter | Esc: clear/back | Enter: list | Tab: switch",
        Focus::List => " Tab: switch | up/down: move | /: search | Enter: preview | q: quit",
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);

    if model.preview_open() {
        view_overlay(f, model.page.preview().overlay(), model.document.as_ref());
    }
}

/// 検索欄を描画
fn view_search(f: &mut Frame, group: &GroupView, focus: Focus, area: Rect) {
    let border_style = if focus == Focus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = group.filter.value();
    let line = if value.is_empty() && focus != Focus::Search {
        Line::from(Span::styled(
            "Search notes...",
            Style::default().fg(Color::DarkGray),
        ))
    } else if focus == Focus::Search {
        Line::from(vec![Span::raw(value), Span::raw("_")])
    } else {
        Line::raw(value)
    };
    let search = Paragraph::new(line).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);
}

/// カード一覧を描画（結果なしなら空状態メッセージ）
fn view_cards(f: &mut Frame, group: &GroupView, model: &Model, area: Rect) {
    let shown = group.container.shown();
    let title = format!(" {} ({}) ", group.label(), shown.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    if group.container.is_empty_state() {
        let empty = Paragraph::new(EMPTY_STATE_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = shown
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(Span::styled(
                entry.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if !entry.desc().is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.desc()),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = model.state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// プレビューのオーバーレイを描画
fn view_overlay(f: &mut Frame, overlay: &Overlay, document: Option<&DocumentInfo>) {
    let area = overlay_rect(70, 11, f.area());
    f.render_widget(Clear, area);

    let (location, status) = match document {
        Some(DocumentInfo {
            resolved,
            size: Some(size),
        }) => (
            resolved.display().to_string(),
            Span::styled(format!("{} bytes", size), Style::default().fg(Color::Green)),
        ),
        Some(DocumentInfo {
            resolved,
            size: None,
        }) => (
            resolved.display().to_string(),
            Span::styled("not found", Style::default().fg(Color::Red)),
        ),
        None => (
            overlay.viewer_src.clone(),
            Span::styled("remote", Style::default().fg(Color::DarkGray)),
        ),
    };

    let close_style = if overlay.focus == Some(FocusTarget::CloseButton) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Viewer:   "),
            Span::styled(overlay.viewer_src.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Download: "),
            Span::styled(
                overlay.download_href.as_str(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![Span::raw("Location: "), Span::raw(location)]),
        Line::from(vec![Span::raw("Status:   "), status]),
        Line::raw(""),
        Line::from(Span::styled("[ Close ]", close_style)),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(para, area);
}
