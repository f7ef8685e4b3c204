use std::path::PathBuf;
use thiserror::Error;

/// notecat 統一エラー型
#[derive(Debug, Error)]
pub enum NotecatError {
    #[error("Catalog file not found: {0}. Run 'notecat init' to create one.")]
    CatalogNotFound(PathBuf),

    #[error("Unsupported catalog format: {0}. Expected .toml, .json, .yaml or .yml")]
    UnsupportedFormat(String),

    #[error("Invalid group key '{0}'. Only [A-Za-z0-9_-] are allowed.")]
    InvalidGroupKey(String),

    #[error("Duplicate group key: {0}")]
    DuplicateGroupKey(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Invalid file reference attribute: {0}")]
    InvalidFileRef(String),

    #[error("Refusing to overwrite {0} (use --force)")]
    AlreadyExists(PathBuf),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Directory scan error: {0}")]
    Scan(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, NotecatError>;
