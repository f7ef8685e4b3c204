/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列・空白のみはNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// 環境変数が設定されているか
    pub fn is_set(key: &str) -> bool {
        Self::get(key).is_some()
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
