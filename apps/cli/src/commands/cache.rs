use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use norgate_parts::catalog::read_records;
use norgate_parts::db;
use rusqlite::Connection;
use tracing::info;

use super::load_alias_file;
use crate::config::Config;

/// Fill `db_path` from the configured CSV and alias sources.
///
/// Metadata-only rows are stored too, so the cache mirrors the sheet.
pub fn run(config: &Config, db_path: &Path, out: &mut impl Write) -> Result<()> {
    let parts = config
        .parts
        .as_deref()
        .context("a cache is built from the parts CSV; pass --parts or set `parts` in norgate.toml")?;
    let file =
        File::open(parts).with_context(|| format!("failed to open {}", parts.display()))?;
    let records =
        read_records(file).with_context(|| format!("failed to read {}", parts.display()))?;
    let aliases = load_alias_file(config)?;

    let mut conn = Connection::open(db_path)
        .with_context(|| format!("failed to open cache {}", db_path.display()))?;
    db::init_db(&conn)?;
    let part_rows = db::store_records(&mut conn, &records)?;
    let alias_rows = db::store_aliases(&mut conn, &aliases)?;
    info!(part_rows, alias_rows, cache = %db_path.display(), "catalog cache written");

    writeln!(
        out,
        "cached {part_rows} part rows and {alias_rows} aliases in {}",
        db_path.display()
    )?;
    Ok(())
}
