//! Construct-name grammar.
//!
//! ```text
//! pMOD [-] MARKER [-] PROMOTER "-" CASSETTE
//! ```
//!
//! Matching is case-insensitive, anchored at the start of the name, and
//! ignores whatever follows a complete match.

pub mod name;
pub mod parser;

pub use name::{Cassette, GuideFamily, Marker, ParsedName};
pub use parser::{parse_name, try_parse_name};

use thiserror::Error;

/// The identifier does not follow the naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' does not match the construct naming grammar")]
pub struct GrammarMismatch(pub String);
