use std::io::Write;

use anyhow::{Context, Result};
use norgate_assembly::ConstructAssembler;
use norgate_grammar::GrammarMismatch;
use serde::Serialize;

use super::{load_sources, write_json};
use crate::config::Config;
use crate::dto::SequenceDto;

/// One output line of `norgate assemble`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssembleRecord {
    Assembled { name: String, construct: SequenceDto },
    Mismatch { name: String, reason: String },
}

pub fn run(config: &Config, names: &[String], pretty: bool, out: &mut impl Write) -> Result<()> {
    let (catalog, aliases) = load_sources(config)?;
    let assembler =
        ConstructAssembler::new(&catalog, &aliases).with_options(config.promoter.clone());

    for name in names {
        let record = assemble_one(&assembler, name)?;
        write_json(out, &record, pretty)?;
    }
    Ok(())
}

/// Assemble `name`. A name outside the convention becomes a `Mismatch`
/// record; missing parts and unknown families are errors.
pub fn assemble_one(assembler: &ConstructAssembler<'_>, name: &str) -> Result<AssembleRecord> {
    let assembled = assembler
        .parse(name)
        .with_context(|| format!("failed to assemble '{name}'"))?;
    Ok(match assembled {
        Some(seq) => AssembleRecord::Assembled {
            name: name.to_string(),
            construct: SequenceDto::from(&seq),
        },
        None => AssembleRecord::Mismatch {
            name: name.to_string(),
            reason: GrammarMismatch(name.to_string()).to_string(),
        },
    })
}
