use std::io::Write;

use anyhow::Result;
use norgate_grammar::{parse_name, ParsedName};
use serde::Serialize;

use super::write_json;

#[derive(Debug, Clone, Serialize)]
pub struct ParseRecord {
    pub name: String,
    /// `null` when the name does not follow the convention.
    pub parsed: Option<ParsedName>,
}

pub fn run(names: &[String], out: &mut impl Write) -> Result<()> {
    for name in names {
        let record = ParseRecord {
            name: name.clone(),
            parsed: parse_name(name),
        };
        write_json(out, &record, false)?;
    }
    Ok(())
}
