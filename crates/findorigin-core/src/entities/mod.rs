//! Deterministic entity extraction
//!
//! Turns free text into claims, dates, numbers, names and links using
//! pattern matching only, and composes a search query from the result.

mod names;
mod patterns;

pub use names::extract_names;
pub use patterns::{EntityPattern, PATTERNS};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of claims kept per text
pub const MAX_CLAIMS: usize = 5;

/// Minimum length (in characters) of a sentence considered as a claim
pub const MIN_CLAIM_CHARS: usize = 16;

/// Names appended to the search query
const QUERY_NAMES: usize = 3;

/// Query returned when nothing could be extracted
pub const FALLBACK_QUERY: &str = "источник";

lazy_static::lazy_static! {
    /// Sentence terminators: a run of `.`, `!` or `?` followed by whitespace
    /// or the end of text, so decimals and dotted dates stay intact.
    static ref SENTENCE_END_RE: Regex = Regex::new(r"[.!?]+(?:\s+|$)").unwrap();
}

/// Entity categories recognised by the pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Claim,
    Date,
    Number,
    Name,
    Link,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Claim => "claim",
            EntityKind::Date => "date",
            EntityKind::Number => "number",
            EntityKind::Name => "name",
            EntityKind::Link => "link",
        }
    }
}

/// Entities extracted from one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Fact-bearing sentences, at most [`MAX_CLAIMS`]
    pub claims: Vec<String>,
    pub dates: Vec<String>,
    pub numbers: Vec<String>,
    pub names: Vec<String>,
    pub links: Vec<String>,
}

impl Entities {
    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
            && self.dates.is_empty()
            && self.numbers.is_empty()
            && self.names.is_empty()
            && self.links.is_empty()
    }

    /// Values of one category
    pub fn get(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Claim => &self.claims,
            EntityKind::Date => &self.dates,
            EntityKind::Number => &self.numbers,
            EntityKind::Name => &self.names,
            EntityKind::Link => &self.links,
        }
    }
}

/// Extract all entities from `text`.
///
/// Pure and deterministic; empty input gives empty containers.
pub fn extract(text: &str) -> Entities {
    let links = patterns::find_all(EntityKind::Link, text);
    let dates = patterns::find_all(EntityKind::Date, text);
    let numbers = patterns::find_all(EntityKind::Number, text);
    let names = names::extract_names(text);
    let claims = extract_claims(text, &[&numbers, &dates, &names]);

    Entities {
        claims,
        dates,
        numbers,
        names,
        links,
    }
}

/// Sentences long enough to matter that mention an already-found entity.
/// A trailing `.` on an entity (`3 тыс.`) may be the sentence terminator,
/// so it is ignored when matching.
fn extract_claims(text: &str, found: &[&Vec<String>]) -> Vec<String> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_CLAIM_CHARS)
        .filter(|s| {
            found.iter().any(|values| {
                values
                    .iter()
                    .any(|v| s.contains(v.trim_end_matches('.')))
            })
        })
        .take(MAX_CLAIMS)
        .map(str::to_string)
        .collect()
}

/// Compose a search query: first claim, up to three names, first date.
/// Never empty.
pub fn build_search_query(entities: &Entities) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(claim) = entities.claims.first() {
        parts.push(claim);
    }
    parts.extend(entities.names.iter().take(QUERY_NAMES).map(String::as_str));
    if let Some(date) = entities.dates.first() {
        parts.push(date);
    }

    let query = parts.join(" ");
    let query = query.trim();
    if query.is_empty() {
        FALLBACK_QUERY.to_string()
    } else {
        query.to_string()
    }
}
