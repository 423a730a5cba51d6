//! Read-only parts catalog and shorthand alias table, plus their loaders.

pub mod alias;
pub mod catalog;
pub mod db;
pub mod part;

pub use alias::AliasTable;
pub use catalog::PartsCatalog;
pub use part::{Part, PartRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
