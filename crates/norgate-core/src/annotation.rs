use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Reverse,
    None,
}

impl Strand {
    pub fn as_i8(&self) -> i8 {
        match self {
            Strand::Forward => 1,
            Strand::Reverse => -1,
            Strand::None => 0,
        }
    }

    /// The strand an annotation lands on after reverse-complementing its sequence.
    pub fn flipped(&self) -> Self {
        match self {
            Strand::Forward => Strand::Reverse,
            Strand::Reverse => Strand::Forward,
            Strand::None => Strand::None,
        }
    }
}

/// Half-open residue range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn shifted(&self, offset: usize) -> Self {
        Span::new(self.start + offset, self.end + offset)
    }

    /// Mirror the span onto the opposite strand of a sequence of `seq_len` residues.
    pub fn mirrored(&self, seq_len: usize) -> Self {
        Span::new(
            seq_len.saturating_sub(self.end),
            seq_len.saturating_sub(self.start),
        )
    }

    /// Clip to `window`, re-based on the window start. `None` when nothing overlaps.
    pub fn clipped(&self, window: Span) -> Option<Self> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        if start >= end {
            return None;
        }
        Some(Span::new(start - window.start, end - window.start))
    }
}

/// A labelled region attached to one [`crate::Sequence`].
///
/// An unset `span` covers the whole sequence, whatever its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: Uuid,
    pub label: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub span: Option<Span>,
    pub strand: Strand,
    /// Display colour; assigned by viewers, never by assembly.
    #[serde(default)]
    pub color: Option<String>,
}

impl Annotation {
    pub fn new(label: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            category: None,
            span,
            strand: Strand::Forward,
            color: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Concrete range on a sequence of `seq_len` residues.
    pub fn resolved_span(&self, seq_len: usize) -> Span {
        self.span.unwrap_or(Span::new(0, seq_len))
    }

    pub fn covers_whole_sequence(&self) -> bool {
        self.span.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_mirrored() {
        let span = Span::new(2, 5);
        assert_eq!(span.mirrored(10), Span::new(5, 8));
        assert_eq!(span.mirrored(10).mirrored(10), span);
    }

    #[test]
    fn test_span_clipped() {
        let span = Span::new(2, 8);
        assert_eq!(span.clipped(Span::new(0, 4)), Some(Span::new(2, 4)));
        assert_eq!(span.clipped(Span::new(4, 12)), Some(Span::new(0, 4)));
        assert_eq!(span.clipped(Span::new(8, 12)), None);
    }

    #[test]
    fn test_whole_sequence_annotation() {
        let ann = Annotation::new("tCYC1", None).with_category("terminator");
        assert!(ann.covers_whole_sequence());
        assert_eq!(ann.resolved_span(40), Span::new(0, 40));
        assert_eq!(ann.category.as_deref(), Some("terminator"));
    }

    #[test]
    fn test_strand_flip() {
        assert_eq!(Strand::Forward.flipped(), Strand::Reverse);
        assert_eq!(Strand::Reverse.flipped().as_i8(), 1);
        assert_eq!(Strand::None.flipped(), Strand::None);
    }
}
