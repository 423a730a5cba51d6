//! Backtracking recursive-descent parser for construct names.
//!
//! Token recognisers are nom combinators; the grammar on top of them returns
//! every way a rule can match, in preference order, so a later rule that
//! fails can fall back to the next alternative of an earlier one. Preference
//! order mirrors a regex engine: optional items are tried present first,
//! repeated items longest first, and alternatives left to right.

use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, digit1, one_of, satisfy};
use tracing::debug;

use crate::name::{Cassette, GuideFamily, Marker, ParsedName};
use crate::GrammarMismatch;

type NomError<'a> = nom::error::Error<&'a str>;

/// Candidate matches as `(remaining input, value)`, most preferred first.
type Branches<'a, T> = Vec<(&'a str, T)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PromoterMatch<'a> {
    token: &'a str,
    i: Option<&'a str>,
    j: Option<&'a str>,
}

/// Which cassette forms a parsing pass accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CassetteForms {
    /// Guide cassettes and the eGFP literal.
    Fixed,
    /// Any other gene name.
    GeneName,
}

/// Parse a construct name, `None` when it does not follow the convention.
///
/// The fixed cassette forms are tried across every marker and promoter
/// reading before a bare gene name is considered, so `pGRR-F1-yeGFP` keeps
/// `F1` as an operator.
pub fn parse_name(name: &str) -> Option<ParsedName> {
    let parsed = [CassetteForms::Fixed, CassetteForms::GeneName]
        .into_iter()
        .find_map(|forms| parse_with(name, forms))?;
    debug!(name, ?parsed, "construct name parsed");
    Some(parsed)
}

fn parse_with(name: &str, forms: CassetteForms) -> Option<ParsedName> {
    let after_prefix = literal("pMOD", name)?;

    for start in optional_dash(after_prefix) {
        for (after_marker, found_marker) in marker(start) {
            for before_promoter in optional_dash(after_marker) {
                for (after_promoter, prom) in promoter(before_promoter) {
                    let Some(before_cassette) = dash(after_promoter) else {
                        continue;
                    };
                    if let Some((_, found_cassette)) =
                        cassette(before_cassette, forms).into_iter().next()
                    {
                        return Some(ParsedName {
                            marker: found_marker,
                            promoter: prom.token.to_string(),
                            i: prom.i.map(str::to_ascii_uppercase),
                            j: prom.j.map(str::to_ascii_uppercase),
                            cassette: found_cassette,
                        });
                    }
                }
            }
        }
    }
    None
}

pub fn try_parse_name(name: &str) -> Result<ParsedName, GrammarMismatch> {
    parse_name(name).ok_or_else(|| GrammarMismatch(name.to_string()))
}

// MARKER := digit | HOMOLOGY "-"? MARKER-NAME
fn marker(input: &str) -> Branches<'_, Marker> {
    let mut out = Vec::new();
    if let Ok((rest, digit)) = satisfy::<_, _, NomError<'_>>(|c| c.is_ascii_digit())(input) {
        out.push((
            rest,
            Marker::Numeric {
                code: digit as u8 - b'0',
            },
        ));
    }
    for (after_homology, homology) in literal_or_word("ho", input) {
        for start in optional_dash(after_homology) {
            for (rest, name) in literal_or_word("kan", start) {
                out.push((
                    rest,
                    Marker::Named {
                        homology: homology.to_string(),
                        marker: name.to_string(),
                    },
                ));
            }
        }
    }
    out
}

// PROMOTER := "p" word | "pGRR" ("-" I)? ("-"? J)? | [GA]
fn promoter(input: &str) -> Branches<'_, PromoterMatch<'_>> {
    let mut out = Vec::new();
    let matched = |rest, i, j| {
        (
            rest,
            PromoterMatch {
                token: consumed(input, rest),
                i,
                j,
            },
        )
    };

    if let Some(after_p) = literal("p", input) {
        for (rest, _) in word_runs(after_p) {
            out.push(matched(rest, None, None));
        }
    }

    if let Some(after_core) = literal("pGRR", input) {
        let mut first: Branches<'_, Option<&str>> = Vec::new();
        if let Some(after_dash) = dash(after_core) {
            first.extend(index_tokens(after_dash).into_iter().map(|(r, i)| (r, Some(i))));
        }
        first.push((after_core, None));

        for (after_i, i) in first {
            for start in optional_dash(after_i) {
                for (rest, j) in index_tokens(start) {
                    out.push(matched(rest, i, Some(j)));
                }
            }
            out.push(matched(after_i, i, None));
        }
    }

    if let Some(rest) = any_of("GAga", input) {
        out.push(matched(rest, None, None));
    }
    out
}

// CASSETTE := [iU]? "RGR" "-" INDEX | "y"? "eGFP" | GENE-NAME
fn cassette(input: &str, forms: CassetteForms) -> Branches<'_, Cassette> {
    let mut out = Vec::new();

    if forms == CassetteForms::GeneName {
        // Operator codes are never gene names: `pGRR-W5W8-mCherry` must not
        // stop at `W5W8`.
        if let Some((rest, word)) = word_runs(input).into_iter().next() {
            if index_tokens(word).is_empty() {
                out.push((
                    rest,
                    Cassette::Gene {
                        name: word.to_string(),
                    },
                ));
            }
        }
        return out;
    }

    for start in optional_prefix("iIuU", input) {
        let Some(after_family) = literal("RGR", start) else {
            continue;
        };
        let Some(family) = GuideFamily::from_token(consumed(input, after_family)) else {
            continue;
        };
        let Some(after_dash) = dash(after_family) else {
            continue;
        };
        for (rest, target) in index_tokens(after_dash) {
            out.push((
                rest,
                Cassette::Guide {
                    family,
                    target: target.to_ascii_uppercase(),
                },
            ));
        }
    }

    for start in optional_prefix("yY", input) {
        if let Some(rest) = literal("eGFP", start) {
            out.push((
                rest,
                Cassette::Gene {
                    name: consumed(input, rest).to_string(),
                },
            ));
        }
    }
    out
}

/// `[WF]` followed by digits, longest digit run first.
fn index_tokens(input: &str) -> Branches<'_, &str> {
    let Some(after_letter) = any_of("WFwf", input) else {
        return Vec::new();
    };
    let Ok((_, digits)) = digit1::<_, NomError<'_>>(after_letter) else {
        return Vec::new();
    };
    (1..=digits.len())
        .rev()
        .map(|n| {
            let end = 1 + n;
            (&input[end..], &input[..end])
        })
        .collect()
}

/// A case-insensitive literal, then every word run.
fn literal_or_word<'a>(lit: &'static str, input: &'a str) -> Branches<'a, &'a str> {
    let mut out = Vec::new();
    if let Some(rest) = literal(lit, input) {
        out.push((rest, consumed(input, rest)));
    }
    out.extend(word_runs(input));
    out
}

/// Every non-empty prefix of the leading word, longest first.
fn word_runs(input: &str) -> Branches<'_, &str> {
    let Ok((_, run)) = take_while1::<_, _, NomError<'_>>(is_word)(input) else {
        return Vec::new();
    };
    run.char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .rev()
        .map(|end| (&input[end..], &input[..end]))
        .collect()
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn optional_dash(input: &str) -> Vec<&str> {
    match dash(input) {
        Some(rest) => vec![rest, input],
        None => vec![input],
    }
}

fn optional_prefix<'a>(set: &'static str, input: &'a str) -> Vec<&'a str> {
    match any_of(set, input) {
        Some(rest) => vec![rest, input],
        None => vec![input],
    }
}

fn literal<'a>(lit: &'static str, input: &'a str) -> Option<&'a str> {
    tag_no_case::<_, _, NomError<'a>>(lit)(input)
        .ok()
        .map(|(rest, _)| rest)
}

fn dash(input: &str) -> Option<&str> {
    char::<_, NomError<'_>>('-')(input).ok().map(|(rest, _)| rest)
}

fn any_of<'a>(set: &'static str, input: &'a str) -> Option<&'a str> {
    one_of::<_, _, NomError<'a>>(set)(input)
        .ok()
        .map(|(rest, _)| rest)
}

fn consumed<'a>(input: &'a str, rest: &'a str) -> &'a str {
    &input[..input.len() - rest.len()]
}
