use serde::{Deserialize, Serialize};

/// Marker field: a single-digit family code, or a homology code paired with
/// a marker name (e.g. `LTR1-Nat`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    Numeric { code: u8 },
    Named { homology: String, marker: String },
}

impl Marker {
    pub fn homology(&self) -> Option<&str> {
        match self {
            Marker::Numeric { .. } => None,
            Marker::Named { homology, .. } => Some(homology),
        }
    }

    /// Marker override carried by the name, if any.
    pub fn marker_name(&self) -> Option<&str> {
        match self {
            Marker::Numeric { .. } => None,
            Marker::Named { marker, .. } => Some(marker),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideFamily {
    /// Uninsulated ribozyme-guide-ribozyme cassette.
    #[serde(rename = "RGR")]
    Rgr,
    #[serde(rename = "iRGR")]
    IRgr,
    #[serde(rename = "URGR")]
    URgr,
}

impl GuideFamily {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "rgr" => Some(GuideFamily::Rgr),
            "irgr" => Some(GuideFamily::IRgr),
            "urgr" => Some(GuideFamily::URgr),
            _ => None,
        }
    }

    pub fn is_insulated(&self) -> bool {
        !matches!(self, GuideFamily::Rgr)
    }
}

impl std::fmt::Display for GuideFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuideFamily::Rgr => write!(f, "RGR"),
            GuideFamily::IRgr => write!(f, "iRGR"),
            GuideFamily::URgr => write!(f, "URGR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cassette {
    /// Guide-RNA cassette aimed at `target`.
    Guide { family: GuideFamily, target: String },
    /// Plain expression cassette for a gene part.
    Gene { name: String },
}

/// Structured fields of a construct name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub marker: Marker,
    /// Promoter token as written, e.g. `A`, `pADH1`, `pGRR-W5W8`.
    pub promoter: String,
    /// First pGRR operator index.
    #[serde(default)]
    pub i: Option<String>,
    /// Second pGRR operator index.
    #[serde(default)]
    pub j: Option<String>,
    pub cassette: Cassette,
}

impl ParsedName {
    pub fn guide_family(&self) -> Option<GuideFamily> {
        match &self.cassette {
            Cassette::Guide { family, .. } => Some(*family),
            Cassette::Gene { .. } => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match &self.cassette {
            Cassette::Guide { target, .. } => Some(target),
            Cassette::Gene { .. } => None,
        }
    }

    pub fn uses_pgrr(&self) -> bool {
        self.promoter.to_ascii_uppercase().contains("PGRR")
    }
}
