use norgate_core::Sequence;
use norgate_parts::PartsCatalog;
use tracing::trace;

use crate::AssemblyError;

/// One position in an assembly list.
#[derive(Debug, Clone)]
pub enum Element<'a> {
    /// Residues supplied by the caller, used as given.
    Literal(Sequence),
    /// A catalog part name; resolved to a copy of the catalog entry.
    Part(&'a str),
    /// Nothing: contributes no residues and leaves no gap.
    Skip,
}

impl Default for Element<'_> {
    fn default() -> Self {
        Element::Skip
    }
}

impl<'a> Element<'a> {
    pub fn is_skip(&self) -> bool {
        matches!(self, Element::Skip)
    }
}

impl<'a> From<&'a str> for Element<'a> {
    fn from(name: &'a str) -> Self {
        Element::Part(name)
    }
}

impl From<Sequence> for Element<'_> {
    fn from(seq: Sequence) -> Self {
        Element::Literal(seq)
    }
}

impl<'a, T: Into<Element<'a>>> From<Option<T>> for Element<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Element::Skip)
    }
}

/// Copy of the named part, or `PartNotFound`.
pub fn resolve_part(catalog: &PartsCatalog, name: &str) -> Result<Sequence, AssemblyError> {
    catalog
        .get(name)
        .map(|part| part.sequence.clone())
        .ok_or_else(|| AssemblyError::PartNotFound(name.to_string()))
}

/// Resolve one element. Skips and blank part names yield `None`.
pub fn resolve(
    catalog: &PartsCatalog,
    element: Element<'_>,
) -> Result<Option<Sequence>, AssemblyError> {
    match element {
        Element::Skip => Ok(None),
        Element::Literal(seq) => Ok(Some(seq)),
        Element::Part(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Ok(None);
            }
            trace!(part = name, "resolving part");
            resolve_part(catalog, name).map(Some)
        }
    }
}

/// Concatenate `elements` in order.
///
/// Catalog entries are copied before use; the catalog itself is never
/// changed. The first unresolvable name aborts the assembly.
pub fn concat_parts<'a, I>(catalog: &PartsCatalog, elements: I) -> Result<Sequence, AssemblyError>
where
    I: IntoIterator<Item = Element<'a>>,
{
    let mut out = Sequence::default();
    for element in elements {
        if let Some(seq) = resolve(catalog, element)? {
            out.append(seq);
        }
    }
    Ok(out)
}
