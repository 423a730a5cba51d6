//! Template-driven assembly of construct sequences from parts.

pub mod assembler;
pub mod cassette;
pub mod orchestrator;
pub mod promoter;
pub mod vector;

pub use assembler::{concat_parts, Element};
pub use cassette::{CassetteFamily, CassetteSlots, GuideTemplate, Insulators};
pub use orchestrator::{AssemblyOptions, ConstructAssembler};
pub use promoter::synthesize_pgrr;
pub use vector::{assemble_vector, HomologyFamily};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("Part not found in catalog: {0}")]
    PartNotFound(String),
    #[error("Unknown homology family: {0}")]
    UnknownHomologyFamily(String),
    #[error("No insulated guide cassette registered for promoter: {0}")]
    UnknownPromoterFamily(String),
}
