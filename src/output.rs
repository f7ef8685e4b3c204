use owo_colors::OwoColorize;

/// コマンド完了時の 1 行サマリ
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// グループ数・エントリ数からサマリを作成
    pub fn format(target: &str, groups: usize, entries: usize) -> Self {
        match (groups, entries) {
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: format!("{} written with no groups", target),
            },
            (g, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: format!("{} written: {} group(s), no notes added yet", target, g.yellow()),
            },
            (g, e) => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} written: {} group(s), {} note(s)",
                    target,
                    g.green(),
                    e.green()
                ),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}
