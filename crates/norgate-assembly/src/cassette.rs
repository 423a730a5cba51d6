//! Guide-RNA cassette templates.
//!
//! [`CassetteSlots`] is the generic role-slot layout; [`GuideTemplate`]
//! constants fill the fixed roles for each cassette family and leave the
//! target payload to the caller.

use norgate_core::Sequence;
use norgate_grammar::GuideFamily;
use norgate_parts::PartsCatalog;
use tracing::debug;

use crate::assembler::{concat_parts, resolve, Element};
use crate::AssemblyError;

/// Residues of the target copied (reverse-complemented) into a
/// target-derived insulator.
pub const DERIVED_INSULATOR_LEN: usize = 6;

/// Role slots of a cassette, in assembly order. Unset slots are left out.
#[derive(Debug, Clone, Default)]
pub struct CassetteSlots<'a> {
    pub promoter: Element<'a>,
    pub promoter_linker: Element<'a>,
    pub pre_insulator: Element<'a>,
    pub ribozyme_5: Element<'a>,
    pub post_insulator: Element<'a>,
    pub target: Element<'a>,
    pub handle: Element<'a>,
    pub ribozyme_3: Element<'a>,
    pub terminator_linker: Element<'a>,
    pub terminator: Element<'a>,
}

impl<'a> CassetteSlots<'a> {
    pub fn into_elements(self) -> [Element<'a>; 10] {
        [
            self.promoter,
            self.promoter_linker,
            self.pre_insulator,
            self.ribozyme_5,
            self.post_insulator,
            self.target,
            self.handle,
            self.ribozyme_3,
            self.terminator_linker,
            self.terminator,
        ]
    }

    pub fn assemble(self, catalog: &PartsCatalog) -> Result<Sequence, AssemblyError> {
        concat_parts(catalog, self.into_elements())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insulators {
    /// Pre-insulator is the reverse complement of the target's first
    /// residues; no post-insulator.
    TargetDerived,
    /// Catalog-defined pair flanking the 5' ribozyme.
    Fixed {
        pre: &'static str,
        post: &'static str,
    },
}

/// Fixed part bindings for one guide cassette family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideTemplate {
    pub ribozyme_5: &'static str,
    pub insulators: Insulators,
    pub handle: &'static str,
    pub ribozyme_3: &'static str,
    pub terminator_linker: &'static str,
    pub terminator: &'static str,
}

const HANDLE: &str = "spCas9 gRNA Handle";
const HDV_RIBOZYME: &str = "HDV Ribozyme";
const TERMINATOR_LINKER: &str = "TP";
const TERMINATOR: &str = "tCYC1";
const ASBV1_RIBOZYME: &str = "ASBV1 Ribozyme";

pub const UNINSULATED: GuideTemplate = GuideTemplate {
    ribozyme_5: "HH Ribozyme",
    insulators: Insulators::TargetDerived,
    handle: HANDLE,
    ribozyme_3: HDV_RIBOZYME,
    terminator_linker: TERMINATOR_LINKER,
    terminator: TERMINATOR,
};

pub const INSULATED_PADH1: GuideTemplate = GuideTemplate {
    ribozyme_5: ASBV1_RIBOZYME,
    insulators: Insulators::Fixed {
        pre: "ASBV1 pADH1_INS1",
        post: "ASBV1 pADH1_INS2",
    },
    ..UNINSULATED
};

pub const INSULATED_PGAL: GuideTemplate = GuideTemplate {
    ribozyme_5: ASBV1_RIBOZYME,
    insulators: Insulators::Fixed {
        pre: "ASBV1 pGAL1_INS1",
        post: "ASBV1 pGAL1_INS2",
    },
    ..UNINSULATED
};

pub const INSULATED_PGRR: GuideTemplate = GuideTemplate {
    ribozyme_5: ASBV1_RIBOZYME,
    insulators: Insulators::Fixed {
        pre: "ASBV1 pGRR_INS1",
        post: "ASBV1 pGRR_INS2",
    },
    ..UNINSULATED
};

impl GuideTemplate {
    /// Bind this template's parts and `target` into cassette slots.
    /// Promoter slots stay empty; the caller wraps the cassette.
    pub fn slots<'a>(
        &self,
        catalog: &PartsCatalog,
        target: Element<'a>,
    ) -> Result<CassetteSlots<'a>, AssemblyError> {
        let (pre_insulator, post_insulator, target) = match self.insulators {
            Insulators::Fixed { pre, post } => (Element::Part(pre), Element::Part(post), target),
            Insulators::TargetDerived => {
                let target = resolve(catalog, target)?.unwrap_or_default();
                let insulator = target.slice(0, DERIVED_INSULATOR_LEN).reverse_complement();
                (
                    Element::Literal(insulator),
                    Element::Skip,
                    Element::Literal(target),
                )
            }
        };

        Ok(CassetteSlots {
            pre_insulator,
            ribozyme_5: Element::Part(self.ribozyme_5),
            post_insulator,
            target,
            handle: Element::Part(self.handle),
            ribozyme_3: Element::Part(self.ribozyme_3),
            terminator_linker: Element::Part(self.terminator_linker),
            terminator: Element::Part(self.terminator),
            ..CassetteSlots::default()
        })
    }

    pub fn build(
        &self,
        catalog: &PartsCatalog,
        target: Element<'_>,
    ) -> Result<Sequence, AssemblyError> {
        self.slots(catalog, target)?.assemble(catalog)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CassetteFamily {
    Uninsulated,
    InsulatedAdh1,
    InsulatedGal,
    InsulatedGrr,
}

impl CassetteFamily {
    pub fn template(&self) -> &'static GuideTemplate {
        match self {
            CassetteFamily::Uninsulated => &UNINSULATED,
            CassetteFamily::InsulatedAdh1 => &INSULATED_PADH1,
            CassetteFamily::InsulatedGal => &INSULATED_PGAL,
            CassetteFamily::InsulatedGrr => &INSULATED_PGRR,
        }
    }

    /// Pick the family for a guide cassette expressed from `promoter`.
    ///
    /// Insulated guides need a registered promoter context; any promoter
    /// naming pGRR uses the pGRR insulators.
    pub fn select(guide: GuideFamily, promoter: &str) -> Result<Self, AssemblyError> {
        if !guide.is_insulated() {
            return Ok(CassetteFamily::Uninsulated);
        }
        let family = if promoter.to_ascii_uppercase().contains("PGRR") {
            CassetteFamily::InsulatedGrr
        } else if promoter.eq_ignore_ascii_case("pADH1") {
            CassetteFamily::InsulatedAdh1
        } else if promoter.eq_ignore_ascii_case("pGALZ4") || promoter.eq_ignore_ascii_case("pGAL1")
        {
            CassetteFamily::InsulatedGal
        } else {
            return Err(AssemblyError::UnknownPromoterFamily(promoter.to_string()));
        };
        debug!(?guide, promoter, ?family, "cassette family selected");
        Ok(family)
    }

    pub fn build(
        &self,
        catalog: &PartsCatalog,
        target: Element<'_>,
    ) -> Result<Sequence, AssemblyError> {
        self.template().build(catalog, target)
    }
}
