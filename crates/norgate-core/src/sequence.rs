use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::annotation::{Annotation, Span};
use crate::operations;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sequence: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::new("", "")
    }
}

impl Sequence {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            sequence: sequence.into().to_uppercase(),
            annotations: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Attach a labelled region; `None` labels the whole sequence.
    pub fn annotate(&mut self, span: Option<Span>, label: impl Into<String>) -> &mut Annotation {
        self.annotations.push(Annotation::new(label, span));
        let last = self.annotations.len() - 1;
        &mut self.annotations[last]
    }

    /// Append `other` in place. Whole-sequence annotations on either side are
    /// pinned to their own residues first so they don't grow with the result.
    pub fn append(&mut self, other: Sequence) {
        self.pin_annotations();
        let offset = self.len();
        let other_len = other.len();
        self.sequence.push_str(&other.sequence);
        for mut ann in other.annotations {
            ann.span = Some(ann.resolved_span(other_len).shifted(offset));
            self.annotations.push(ann);
        }
    }

    /// Borrowing concatenation; neither operand is touched.
    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut out = self.clone();
        out.id = Uuid::new_v4();
        out.append(other.clone());
        out
    }

    /// Copy of residues `start..end`, clamped to the sequence bounds.
    pub fn slice(&self, start: usize, end: usize) -> Sequence {
        let (start, end) = operations::clamp_range(self.len(), start, end);
        let window = Span::new(start, end);
        let mut out = Sequence::new(
            self.name.clone(),
            String::from_utf8_lossy(&self.sequence.as_bytes()[start..end]).into_owned(),
        );
        out.description = self.description.clone();
        out.annotations = self
            .annotations
            .iter()
            .filter_map(|ann| match ann.span {
                None => Some(ann.clone()),
                Some(span) => span.clipped(window).map(|clipped| {
                    let mut ann = ann.clone();
                    ann.span = Some(clipped);
                    ann
                }),
            })
            .collect();
        out
    }

    /// New sequence holding the opposite strand, read 5' to 3'.
    pub fn reverse_complement(&self) -> Sequence {
        let len = self.len();
        let mut out = Sequence::new(
            self.name.clone(),
            operations::reverse_complement(&self.sequence),
        );
        out.description = self.description.clone();
        out.annotations = self
            .annotations
            .iter()
            .rev()
            .map(|ann| {
                let mut ann = ann.clone();
                ann.span = ann.span.map(|span| span.mirrored(len));
                ann.strand = ann.strand.flipped();
                ann
            })
            .collect();
        out
    }

    fn pin_annotations(&mut self) {
        let len = self.len();
        for ann in &mut self.annotations {
            if ann.span.is_none() {
                ann.span = Some(Span::new(0, len));
            }
        }
    }
}

impl std::ops::Add for Sequence {
    type Output = Sequence;

    fn add(mut self, rhs: Sequence) -> Sequence {
        self.append(rhs);
        self
    }
}
