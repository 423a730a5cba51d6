use std::io::Write;

use anyhow::Result;
use norgate_parts::Part;

use super::load_sources;
use crate::config::Config;

/// Print `name<TAB>category<TAB>length` for each resolvable part, sorted by name.
pub fn run(config: &Config, category: Option<&str>, out: &mut impl Write) -> Result<()> {
    let (catalog, _) = load_sources(config)?;
    let parts: Vec<&Part> = match category {
        Some(category) => catalog.parts_in_category(category).into_values().collect(),
        None => catalog
            .names()
            .into_iter()
            .filter_map(|name| catalog.get(name))
            .collect(),
    };
    for part in parts {
        writeln!(out, "{}\t{}\t{}", part.name, part.category, part.len())?;
    }
    Ok(())
}
