//! Flat, JSON-friendly views of assembled constructs.

use norgate_core::{Annotation, Sequence};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sequence: String,
    pub length: usize,
    pub annotations: Vec<AnnotationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDto {
    pub id: String,
    pub label: String,
    pub category: Option<String>,
    pub start: usize,
    pub end: usize,
    pub strand: i8,
    pub color: Option<String>,
}

impl AnnotationDto {
    /// Unset spans are written out as the whole of a `seq_len` sequence.
    pub fn from_annotation(a: &Annotation, seq_len: usize) -> Self {
        let span = a.resolved_span(seq_len);
        AnnotationDto {
            id: a.id.to_string(),
            label: a.label.clone(),
            category: a.category.clone(),
            start: span.start,
            end: span.end,
            strand: a.strand.as_i8(),
            color: a.color.clone(),
        }
    }
}

impl From<&Sequence> for SequenceDto {
    fn from(seq: &Sequence) -> Self {
        SequenceDto {
            id: seq.id.to_string(),
            name: seq.name.clone(),
            description: seq.description.clone(),
            sequence: seq.sequence.clone(),
            length: seq.len(),
            annotations: seq
                .annotations
                .iter()
                .map(|a| AnnotationDto::from_annotation(a, seq.len()))
                .collect(),
        }
    }
}
