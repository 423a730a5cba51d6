//! pMOD integration vector templates.

use norgate_core::Sequence;
use norgate_parts::PartsCatalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembler::{concat_parts, Element};
use crate::AssemblyError;

/// Homology families a pMOD vector can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HomologyFamily {
    Ura,
    His,
    Trp,
    Ltr1,
    Ltr2,
    Ltr3,
    Ho,
}

/// Parts flanking the cassette for one homology family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomologyArms {
    pub arm_one_before_marker: &'static [&'static str],
    pub marker: &'static str,
    pub arm_one_after_marker: &'static [&'static str],
    pub arm_two: &'static [&'static str],
}

impl HomologyArms {
    /// Arm one with the marker slot filled by `marker_override` when given.
    pub fn arm_one<'a>(&self, marker_override: Option<&'a str>) -> Vec<&'a str> {
        let mut parts: Vec<&'a str> = self.arm_one_before_marker.to_vec();
        parts.push(marker_override.unwrap_or(self.marker));
        parts.extend_from_slice(self.arm_one_after_marker);
        parts
    }
}

impl HomologyFamily {
    pub const ALL: [HomologyFamily; 7] = [
        HomologyFamily::Ura,
        HomologyFamily::His,
        HomologyFamily::Trp,
        HomologyFamily::Ltr1,
        HomologyFamily::Ltr2,
        HomologyFamily::Ltr3,
        HomologyFamily::Ho,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HomologyFamily::Ura => "URA",
            HomologyFamily::His => "HIS",
            HomologyFamily::Trp => "TRP",
            HomologyFamily::Ltr1 => "LTR1",
            HomologyFamily::Ltr2 => "LTR2",
            HomologyFamily::Ltr3 => "LTR3",
            HomologyFamily::Ho => "HO",
        }
    }

    /// Case-insensitive lookup by family code.
    pub fn from_code(code: &str) -> Result<Self, AssemblyError> {
        Self::ALL
            .into_iter()
            .find(|family| family.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| AssemblyError::UnknownHomologyFamily(code.to_string()))
    }

    /// Family for a single-digit marker code.
    pub fn from_marker_digit(digit: u8) -> Result<Self, AssemblyError> {
        match digit {
            6 => Ok(HomologyFamily::Ura),
            8 => Ok(HomologyFamily::His),
            4 => Ok(HomologyFamily::Trp),
            other => Err(AssemblyError::UnknownHomologyFamily(other.to_string())),
        }
    }

    pub fn arms(&self) -> HomologyArms {
        match self {
            HomologyFamily::Ura => HomologyArms {
                arm_one_before_marker: &["URA3 Promoter"],
                marker: "URA3",
                arm_one_after_marker: &["tADH1"],
                arm_two: &["URA3 3'UTR"],
            },
            HomologyFamily::His => HomologyArms {
                arm_one_before_marker: &["HIS3 Promoter"],
                marker: "HIS3",
                arm_one_after_marker: &["tADH1"],
                arm_two: &["HIS3 3'UTR"],
            },
            HomologyFamily::Trp => HomologyArms {
                arm_one_before_marker: &["TRP1 Promoter"],
                marker: "TRP1",
                arm_one_after_marker: &["tADH1"],
                arm_two: &["TRP1 3'UTR"],
            },
            HomologyFamily::Ltr1 => HomologyArms {
                arm_one_before_marker: &["LTR1 homology 1"],
                marker: "NATMX",
                arm_one_after_marker: &[],
                arm_two: &["LTR1 homology 2"],
            },
            HomologyFamily::Ltr2 => HomologyArms {
                arm_one_before_marker: &["LTR2 homology 1"],
                marker: "BLEOMX",
                arm_one_after_marker: &[],
                arm_two: &["LTR2 homology 2"],
            },
            HomologyFamily::Ltr3 => HomologyArms {
                arm_one_before_marker: &["LTR3 homology 1"],
                marker: "HYBMX",
                arm_one_after_marker: &[],
                arm_two: &["LTR3 homology 2"],
            },
            HomologyFamily::Ho => HomologyArms {
                arm_one_before_marker: &["HO homology 1"],
                marker: "KANMX",
                arm_one_after_marker: &[],
                arm_two: &["HO homology 2"],
            },
        }
    }
}

impl std::fmt::Display for HomologyFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Slots of the full pMOD backbone, before trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackboneSlot {
    Fixed(&'static str),
    ArmOne,
    Cassette,
    ArmTwo,
}

pub const BACKBONE: [BackboneSlot; 8] = [
    BackboneSlot::Fixed("PmeI"),
    BackboneSlot::ArmOne,
    BackboneSlot::Fixed("PP2"),
    BackboneSlot::Cassette,
    BackboneSlot::Fixed("TS"),
    BackboneSlot::ArmTwo,
    BackboneSlot::Fixed("PmeI"),
    BackboneSlot::Fixed("AMPR and ORI"),
];

/// Backbone slots that make it into the assembled sequence: the leading cut
/// site and the trailing cut site plus maintenance region are removed
/// upstream by digestion.
pub fn assembled_backbone() -> &'static [BackboneSlot] {
    &BACKBONE[1..BACKBONE.len() - 2]
}

/// Assemble a pMOD vector around `cassette`.
///
/// `cassette` holds promoter through terminator, without assembly linkers.
pub fn assemble_vector(
    catalog: &PartsCatalog,
    family: HomologyFamily,
    cassette: Sequence,
    marker_override: Option<&str>,
) -> Result<Sequence, AssemblyError> {
    let arms = family.arms();
    let arm_one = arms.arm_one(marker_override);
    debug!(%family, marker = marker_override.unwrap_or(arms.marker), "assembling pMOD vector");

    let mut cassette = Some(cassette);
    let mut elements = Vec::new();
    for slot in assembled_backbone() {
        match *slot {
            BackboneSlot::Fixed(name) => elements.push(Element::Part(name)),
            BackboneSlot::ArmOne => elements.extend(arm_one.iter().copied().map(Element::Part)),
            BackboneSlot::Cassette => elements.push(Element::from(cassette.take())),
            BackboneSlot::ArmTwo => elements.extend(arms.arm_two.iter().copied().map(Element::Part)),
        }
    }
    concat_parts(catalog, elements)
}
