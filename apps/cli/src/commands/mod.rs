pub mod assemble;
pub mod cache;
pub mod parse;
pub mod parts;

use std::io::Write;

use anyhow::{Context, Result};
use norgate_parts::{db, AliasTable, PartsCatalog};
use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

use crate::config::Config;

/// Catalog and alias table for `config`.
///
/// An existing cache database wins over the CSV and JSON sources.
pub fn load_sources(config: &Config) -> Result<(PartsCatalog, AliasTable)> {
    if let Some(cache) = config.cache.as_deref().filter(|path| path.is_file()) {
        info!(cache = %cache.display(), "reading catalog cache");
        let conn = Connection::open(cache)
            .with_context(|| format!("failed to open cache {}", cache.display()))?;
        let catalog = db::load_catalog(&conn).context("failed to read parts from cache")?;
        let aliases = db::load_aliases(&conn).context("failed to read aliases from cache")?;
        return Ok((catalog, aliases));
    }

    let parts = config
        .parts
        .as_deref()
        .context("no parts catalog configured; pass --parts or set `parts` in norgate.toml")?;
    let catalog = PartsCatalog::from_csv_path(parts)
        .with_context(|| format!("failed to load parts from {}", parts.display()))?;
    Ok((catalog, load_alias_file(config)?))
}

/// The configured alias table, or an empty one.
pub fn load_alias_file(config: &Config) -> Result<AliasTable> {
    match config.aliases.as_deref() {
        Some(path) => AliasTable::from_json_path(path)
            .with_context(|| format!("failed to load aliases from {}", path.display())),
        None => Ok(AliasTable::new()),
    }
}

pub(crate) fn write_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
