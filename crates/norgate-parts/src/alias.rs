use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::PartsError;

/// Shorthand code to canonical part name, e.g. `"W5"` to the W5 operator part.
///
/// Lookups never fail: an unknown code resolves to itself, so legacy short
/// codes and full part names can be used interchangeably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `code -> name`.
    pub fn from_json_str(json: &str) -> Result<Self, PartsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, PartsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn insert(&mut self, code: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(code.into(), target.into());
    }

    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.entries.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn resolve_opt<'a>(&'a self, code: Option<&'a str>) -> Option<&'a str> {
        code.map(|c| self.resolve(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
