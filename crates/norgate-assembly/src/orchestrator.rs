use norgate_core::Sequence;
use norgate_grammar::{parse_name, Cassette, Marker, ParsedName};
use norgate_parts::{AliasTable, PartsCatalog};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assembler::{concat_parts, Element};
use crate::cassette::CassetteFamily;
use crate::promoter::synthesize_pgrr;
use crate::vector::{assemble_vector, HomologyFamily};
use crate::AssemblyError;

pub const PROMOTER_LINKER: &str = "PS";
pub const TERMINATOR_LINKER: &str = "TP";
pub const TERMINATOR: &str = "tCYC1";
pub const GFP_PART: &str = "yeGFP";

/// Marker spellings accepted in names, checked in order; the last hit wins.
const MARKER_SPELLINGS: [(&str, &str); 4] = [
    ("hyg", "HYGMX"),
    ("nat", "NATMX"),
    ("kan", "KANMX"),
    ("bleo", "BLEOMX"),
];

/// Promoter parts a name may spell in any case.
const KNOWN_PROMOTERS: [&str; 4] = ["pADH1", "pGPD", "pGALZ4", "pGAL1"];

/// Caller-tunable behaviour of [`ConstructAssembler`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyOptions {
    /// Operator code used when a pGRR name leaves out `i`.
    #[serde(default)]
    pub default_i: Option<String>,
    /// Operator code used when a pGRR name leaves out `j`.
    #[serde(default)]
    pub default_j: Option<String>,
}

/// Turns construct names into assembled vector sequences.
///
/// Holds the catalog and alias table by reference; both are only read.
#[derive(Debug, Clone)]
pub struct ConstructAssembler<'a> {
    catalog: &'a PartsCatalog,
    aliases: &'a AliasTable,
    options: AssemblyOptions,
}

impl<'a> ConstructAssembler<'a> {
    pub fn new(catalog: &'a PartsCatalog, aliases: &'a AliasTable) -> Self {
        Self {
            catalog,
            aliases,
            options: AssemblyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble the construct `name` describes.
    ///
    /// A name outside the naming convention is not an error: it is logged
    /// and `Ok(None)` is returned. Names that parse but reference missing
    /// data fail with a typed [`AssemblyError`].
    pub fn parse(&self, name: &str) -> Result<Option<Sequence>, AssemblyError> {
        let Some(parsed) = parse_name(name) else {
            warn!(name, "no match with construct naming grammar");
            return Ok(None);
        };
        let mut seq = self.assemble(&parsed)?;
        seq.name = name.to_string();
        Ok(Some(seq))
    }

    /// Assemble from already-parsed fields.
    pub fn assemble(&self, parsed: &ParsedName) -> Result<Sequence, AssemblyError> {
        let family = homology_family(&parsed.marker)?;
        let marker = parsed.marker.marker_name().map(normalize_marker);
        let promoter = promoter_name(&parsed.promoter);

        let promoter_element = if parsed.uses_pgrr() {
            Element::Literal(self.pgrr_promoter(parsed)?)
        } else {
            Element::Part(promoter)
        };

        let cassette = match &parsed.cassette {
            Cassette::Guide { family: guide, target } => {
                let target = self.aliases.resolve(target);
                let cassette_family = CassetteFamily::select(*guide, promoter)?;
                debug!(?cassette_family, guide_target = target, "building guide cassette");
                let guide_cassette = cassette_family.build(self.catalog, Element::Part(target))?;
                concat_parts(
                    self.catalog,
                    [
                        promoter_element,
                        Element::Part(PROMOTER_LINKER),
                        Element::Literal(guide_cassette),
                    ],
                )?
            }
            Cassette::Gene { name } => {
                let gene = gene_part(name);
                debug!(gene, "building expression cassette");
                concat_parts(
                    self.catalog,
                    [
                        promoter_element,
                        Element::Part(PROMOTER_LINKER),
                        Element::Part(gene),
                        Element::Part(TERMINATOR_LINKER),
                        Element::Part(TERMINATOR),
                    ],
                )?
            }
        };

        assemble_vector(self.catalog, family, cassette, marker.as_deref())
    }

    fn pgrr_promoter(&self, parsed: &ParsedName) -> Result<Sequence, AssemblyError> {
        let i = parsed.i.as_deref().or(self.options.default_i.as_deref());
        let j = parsed.j.as_deref().or(self.options.default_j.as_deref());
        synthesize_pgrr(
            self.catalog,
            self.aliases.resolve_opt(i),
            self.aliases.resolve_opt(j),
        )
    }
}

/// Homology family named by the marker field.
///
/// Single digits go through the numeric table; so does a homology code
/// written only in digits.
pub fn homology_family(marker: &Marker) -> Result<HomologyFamily, AssemblyError> {
    match marker {
        Marker::Numeric { code } => HomologyFamily::from_marker_digit(*code),
        Marker::Named { homology, .. } if homology.chars().all(|c| c.is_ascii_digit()) => {
            let code = homology
                .parse::<u8>()
                .map_err(|_| AssemblyError::UnknownHomologyFamily(homology.clone()))?;
            HomologyFamily::from_marker_digit(code)
        }
        Marker::Named { homology, .. } => HomologyFamily::from_code(homology),
    }
}

/// Catalog name for a promoter token: single-letter shorthands are
/// expanded and known promoters get their catalog spelling. Anything else is
/// looked up as written.
pub fn promoter_name(token: &str) -> &str {
    if token.eq_ignore_ascii_case("A") {
        "pADH1"
    } else if token.eq_ignore_ascii_case("G") {
        "pGPD"
    } else {
        match KNOWN_PROMOTERS.iter().find(|known| known.eq_ignore_ascii_case(token)) {
            Some(known) => *known,
            None => token,
        }
    }
}

/// Canonical resistance-marker part for a marker spelling; unknown
/// spellings come back unchanged.
pub fn normalize_marker(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    MARKER_SPELLINGS
        .iter()
        .filter(|(needle, _)| lower.contains(needle))
        .last()
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Catalog part for a gene cassette name; every eGFP spelling maps to one part.
pub fn gene_part(name: &str) -> &str {
    if name.to_ascii_lowercase().contains("egfp") {
        GFP_PART
    } else {
        name
    }
}
