mod catalog;
mod cli;
mod commands;
mod env;
mod error;
mod logging;
mod output;
mod page;
mod preview;
mod render;
mod sanitize;
mod search;
mod site;
mod tui;

use clap::Parser;
use cli::Command;
use env::EnvVar;

fn main() {
    let cli = cli::Cli::parse();

    // TUI 表示中の標準エラー出力は画面を崩すため、明示指定時のみ有効にする
    if !matches!(cli.command, Command::Browse(_)) || EnvVar::is_set(logging::LOG_ENV) {
        logging::init(cli.verbose);
    }

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
