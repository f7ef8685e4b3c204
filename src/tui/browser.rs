//! カタログブラウザ TUI
//!
//! グループごとのタブ、検索欄、カード一覧とプレビューのオーバーレイを表示する。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update
//! - `view`: 画面描画

mod app;
mod view;

use crate::catalog::LoadedCatalog;
use app::Model;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// TUI を実行
pub fn run(loaded: &LoadedCatalog) -> io::Result<()> {
    let mut model = Model::new(loaded);

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut model);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
) -> io::Result<()> {
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    app::update(model, msg);
                }
            }
        }
    }
    Ok(())
}
