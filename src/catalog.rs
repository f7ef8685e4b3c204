//! カタログ（エントリ・グループ・ストア・設定ファイル）

pub mod config;
mod entry;
pub mod scan;
mod store;

pub use config::{load, LoadedCatalog};
pub use entry::{Entry, Group};
pub use store::CatalogStore;
