use norgate_core::Sequence;
use norgate_parts::PartsCatalog;
use tracing::debug;

use crate::assembler::{concat_parts, resolve_part, Element};
use crate::AssemblyError;

pub const PGRR_CORE: &str = "pGRR";
pub const PGRR_TATA: &str = "pGRR TATA";
pub const PGRR_RBS: &str = "pGRR RBS";

/// Build a pGRR promoter around operator parts `i` and `j`.
///
/// Layout is core, `i`, TATA, `j`, RBS. `j` is read from the opposite
/// strand, so its part is reverse-complemented. Absent operators are left
/// out; with neither, only the three fixed parts remain.
pub fn synthesize_pgrr(
    catalog: &PartsCatalog,
    i: Option<&str>,
    j: Option<&str>,
) -> Result<Sequence, AssemblyError> {
    debug!(?i, ?j, "synthesizing pGRR promoter");
    let i = i.map(|name| resolve_part(catalog, name)).transpose()?;
    let j = j
        .map(|name| resolve_part(catalog, name).map(|seq| seq.reverse_complement()))
        .transpose()?;

    concat_parts(
        catalog,
        [
            Element::Part(PGRR_CORE),
            Element::from(i),
            Element::Part(PGRR_TATA),
            Element::from(j),
            Element::Part(PGRR_RBS),
        ],
    )
}
