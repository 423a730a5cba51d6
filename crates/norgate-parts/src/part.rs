use norgate_core::{Annotation, Sequence};
use serde::{Deserialize, Serialize};

/// One row of the tabular parts source.
///
/// Column names follow the lab spreadsheet: `Part`, `Sequence`, `Annotation`
/// (the latter holds the part category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    #[serde(rename = "Part")]
    pub name: String,
    #[serde(rename = "Sequence", default)]
    pub sequence: Option<String>,
    #[serde(rename = "Annotation", default)]
    pub category: String,
}

impl PartRecord {
    pub fn new(
        name: impl Into<String>,
        sequence: Option<&str>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.map(String::from),
            category: category.into(),
        }
    }

    /// Residues of this row, or `None` for metadata-only rows.
    ///
    /// Spreadsheet exports spell a missing cell as blank, `None` or `nan`.
    pub fn residues(&self) -> Option<&str> {
        let seq = self.sequence.as_deref()?.trim();
        if seq.is_empty() || seq.eq_ignore_ascii_case("none") || seq.eq_ignore_ascii_case("nan") {
            return None;
        }
        Some(seq)
    }
}

/// A resolvable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub category: String,
    /// Residues, labelled end to end with the part name.
    pub sequence: Sequence,
}

impl Part {
    /// Build a part from a record; `None` when the record carries no residues.
    pub fn from_record(record: &PartRecord) -> Option<Self> {
        let residues = record.residues()?;
        let name = record.name.trim().to_string();
        let category = record.category.trim().to_string();

        let mut sequence = Sequence::new(name.clone(), residues);
        sequence.add_annotation(
            Annotation::new(name.clone(), None).with_category(category.clone()),
        );

        Some(Self {
            name,
            category,
            sequence,
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
