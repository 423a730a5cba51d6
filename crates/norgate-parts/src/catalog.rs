use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{info, warn};

use crate::part::{Part, PartRecord};
use crate::PartsError;

/// Name-to-part lookup, built once and then only read.
///
/// Rows without residues never become parts; they stay out of both the name
/// index and the category index.
#[derive(Debug, Clone, Default)]
pub struct PartsCatalog {
    parts: HashMap<String, Part>,
    by_category: BTreeMap<String, BTreeSet<String>>,
}

impl PartsCatalog {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PartRecord>,
    {
        let mut catalog = PartsCatalog::default();
        let mut skipped = 0usize;

        for record in records {
            let Some(part) = Part::from_record(&record) else {
                skipped += 1;
                continue;
            };
            if let Some(previous) = catalog.parts.remove(&part.name) {
                warn!(part = %part.name, "duplicate catalog row replaces earlier entry");
                if let Some(names) = catalog.by_category.get_mut(&previous.category) {
                    names.remove(&previous.name);
                }
            }
            catalog
                .by_category
                .entry(part.category.clone())
                .or_default()
                .insert(part.name.clone());
            catalog.parts.insert(part.name.clone(), part);
        }
        catalog.by_category.retain(|_, names| !names.is_empty());

        info!(
            parts = catalog.parts.len(),
            categories = catalog.by_category.len(),
            skipped,
            "parts catalog loaded"
        );
        catalog
    }

    /// Read `Part,Sequence,Annotation` rows from CSV text.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, PartsError> {
        Ok(Self::from_records(read_records(reader)?))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, PartsError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn get(&self, name: &str) -> Option<&Part> {
        self.parts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// All part names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    /// Parts tagged with `category`, keyed and ordered by name.
    pub fn parts_in_category(&self, category: &str) -> BTreeMap<&str, &Part> {
        self.by_category
            .get(category)
            .into_iter()
            .flatten()
            .filter_map(|name| self.parts.get(name).map(|p| (name.as_str(), p)))
            .collect()
    }
}

/// Parse the tabular source into raw records, metadata-only rows included.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PartRecord>, PartsError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<PartRecord>() {
        records.push(row?);
    }
    Ok(records)
}
