//! SQLite cache for the parts catalog and alias table.
//!
//! A cache is filled once from the tabular sources and afterwards only read;
//! nothing here updates rows in place.

use rusqlite::{params, Connection, Result as SqlResult};

use crate::alias::AliasTable;
use crate::catalog::PartsCatalog;
use crate::part::PartRecord;

/// Create the cache tables if they do not exist.
pub fn init_db(conn: &Connection) -> SqlResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS parts (
            name      TEXT PRIMARY KEY,
            sequence  TEXT,
            category  TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_parts_category ON parts(category);
        CREATE TABLE IF NOT EXISTS aliases (
            code    TEXT PRIMARY KEY,
            target  TEXT NOT NULL
        );",
    )
}

/// Store raw part rows, metadata-only rows included. Re-storing a name
/// replaces it. Returns the number of rows written.
pub fn store_records(conn: &mut Connection, records: &[PartRecord]) -> SqlResult<usize> {
    let tx = conn.transaction()?;
    let mut count = 0usize;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO parts (name, sequence, category) VALUES (?1, ?2, ?3)",
        )?;
        for r in records {
            count += stmt.execute(params![r.name, r.residues(), r.category])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

pub fn load_records(conn: &Connection) -> SqlResult<Vec<PartRecord>> {
    let mut stmt = conn.prepare("SELECT name, sequence, category FROM parts ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(PartRecord {
            name: row.get(0)?,
            sequence: row.get(1)?,
            category: row.get(2)?,
        })
    })?;
    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}

pub fn load_catalog(conn: &Connection) -> SqlResult<PartsCatalog> {
    Ok(PartsCatalog::from_records(load_records(conn)?))
}

pub fn store_aliases(conn: &mut Connection, aliases: &AliasTable) -> SqlResult<usize> {
    let tx = conn.transaction()?;
    let mut count = 0usize;
    {
        let mut stmt =
            tx.prepare("INSERT OR REPLACE INTO aliases (code, target) VALUES (?1, ?2)")?;
        for (code, target) in aliases.iter() {
            count += stmt.execute(params![code, target])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

pub fn load_aliases(conn: &Connection) -> SqlResult<AliasTable> {
    let mut stmt = conn.prepare("SELECT code, target FROM aliases")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;
    let mut pairs = Vec::new();
    for row in rows {
        pairs.push(row?);
    }
    Ok(pairs.into_iter().collect())
}
