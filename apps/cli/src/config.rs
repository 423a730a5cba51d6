//! `norgate.toml` loading.
//!
//! ```toml
//! parts = "data/NORGateParts.csv"
//! aliases = "data/wset_conversion.json"
//! cache = "norgate.sqlite"
//!
//! [promoter]
//! default_i = "C3"
//! default_j = "C6"
//! ```
//!
//! Relative paths are taken from the directory holding the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use norgate_assembly::AssemblyOptions;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "norgate.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub parts: Option<PathBuf>,
    #[serde(default)]
    pub aliases: Option<PathBuf>,
    #[serde(default)]
    pub cache: Option<PathBuf>,
    #[serde(default)]
    pub promoter: AssemblyOptions,
}

impl Config {
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.resolve_paths(base_dir);
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&text, base_dir)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load `explicit`, else `norgate.toml` in the working directory when
    /// there is one, else an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_path(local);
        }
        debug!("no config file, using command-line paths only");
        Ok(Self::default())
    }

    pub fn with_overrides(
        mut self,
        parts: Option<PathBuf>,
        aliases: Option<PathBuf>,
        cache: Option<PathBuf>,
    ) -> Self {
        if parts.is_some() {
            self.parts = parts;
        }
        if aliases.is_some() {
            self.aliases = aliases;
        }
        if cache.is_some() {
            self.cache = cache;
        }
        self
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        for path in [&mut self.parts, &mut self.aliases, &mut self.cache]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }
}
