//! ログ出力の初期化
//!
//! `NOTECAT_LOG` が設定されていればそれをフィルタとして使う。
//! 未設定なら `warn`、`--verbose` 指定時は `debug`。出力先は標準エラー。

use crate::env::EnvVar;
use tracing_subscriber::EnvFilter;

/// ログフィルタを指定する環境変数
pub const LOG_ENV: &str = "NOTECAT_LOG";

/// フィルタ文字列を決定
pub fn filter_directive(verbose: bool) -> String {
    match EnvVar::get(LOG_ENV) {
        Some(directive) => directive,
        None if verbose => "debug".to_string(),
        None => "warn".to_string(),
    }
}

/// tracing subscriber を初期化（二重初期化は無視）
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_new(filter_directive(verbose))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
