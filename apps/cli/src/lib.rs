//! `norgate` command-line front end.
//!
//! Loads the parts catalog and alias table once, then hands them by
//! reference to whichever subcommand runs. Output goes to the writer passed
//! to [`Cli::execute`]; logs go to stderr.

pub mod commands;
pub mod config;
pub mod dto;
pub mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "norgate", version)]
#[command(about = "Assemble pMOD construct sequences from their names")]
pub struct Cli {
    /// Config file (TOML); defaults to ./norgate.toml when present
    #[arg(long, global = true, env = "NORGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Parts catalog CSV (Part,Sequence,Annotation)
    #[arg(long, global = true)]
    pub parts: Option<PathBuf>,

    /// Alias table JSON
    #[arg(long, global = true)]
    pub aliases: Option<PathBuf>,

    /// SQLite catalog cache, read instead of the CSV when it exists
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assemble each named construct and print one JSON record per name
    Assemble {
        #[arg(required = true)]
        names: Vec<String>,

        /// Pretty-print the JSON records
        #[arg(long)]
        pretty: bool,
    },
    /// Print the fields parsed from each name as JSON
    Parse {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Import the CSV and alias sources into a SQLite cache
    Cache {
        /// Database file to create or refresh
        db: PathBuf,
    },
    /// List resolvable parts
    Parts {
        /// Only parts in this category
        #[arg(long)]
        category: Option<String>,
    },
}

impl Cli {
    /// Config file contents with command-line overrides applied.
    pub fn resolved_config(&self) -> Result<Config> {
        Ok(Config::load(self.config.as_deref())?.with_overrides(
            self.parts.clone(),
            self.aliases.clone(),
            self.cache.clone(),
        ))
    }

    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Command::Parse { names } => commands::parse::run(names, out),
            Command::Assemble { names, pretty } => {
                commands::assemble::run(&self.resolved_config()?, names, *pretty, out)
            }
            Command::Cache { db } => commands::cache::run(&self.resolved_config()?, db, out),
            Command::Parts { category } => {
                commands::parts::run(&self.resolved_config()?, category.as_deref(), out)
            }
        }
    }
}
