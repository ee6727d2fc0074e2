//! Declarative pattern table for entity surface forms

use super::EntityKind;
use regex::Regex;
use std::collections::HashSet;

const MONTHS: &str =
    "января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря";

/// Unit and currency suffixes a number may carry, longest alternatives first
const NUMBER_SUFFIXES: &str = r"%|₽|\$|€|тыс\.?|млрд|млн";

/// One row of the pattern table
pub struct EntityPattern {
    pub kind: EntityKind,
    pub name: &'static str,
    pub regex: Regex,
}

lazy_static::lazy_static! {
    pub static ref PATTERNS: Vec<EntityPattern> = build_patterns();
}

fn pattern(kind: EntityKind, name: &'static str, source: &str) -> EntityPattern {
    EntityPattern {
        kind,
        name,
        regex: Regex::new(source).expect("Invalid entity pattern"),
    }
}

fn build_patterns() -> Vec<EntityPattern> {
    vec![
        pattern(
            EntityKind::Link,
            "url",
            r"(?i)https?://(?:www\.)?[-a-z0-9@:%._+~#=]{1,256}\.[a-z0-9()]{1,6}\b[-a-z0-9()@:%_+.~#?&/=]*",
        ),
        pattern(
            EntityKind::Date,
            "numeric",
            r"[0-9]{1,2}[./][0-9]{1,2}[./][0-9]{2,4}",
        ),
        pattern(EntityKind::Date, "iso", r"[0-9]{4}-[0-9]{2}-[0-9]{2}"),
        pattern(
            EntityKind::Date,
            "day_month_year",
            &format!(r"(?i)[0-9]{{1,2}}\s+(?:{MONTHS})\s+[0-9]{{2,4}}"),
        ),
        pattern(
            EntityKind::Date,
            "month_day_year",
            &format!(r"(?i)(?:{MONTHS})\s+[0-9]{{1,2}},?\s*[0-9]{{4}}"),
        ),
        pattern(
            EntityKind::Number,
            "number",
            &format!(r"(?i)\b[0-9]+(?:[.,][0-9]+)?(?:[ \x{{a0}}]?(?:{NUMBER_SUFFIXES}))?"),
        ),
    ]
}

/// Run every table row of `kind` over `text`, merging hits in table order
/// and dropping repeats.
pub fn find_all(kind: EntityKind, text: &str) -> Vec<String> {
    let hits = PATTERNS
        .iter()
        .filter(|p| p.kind == kind)
        .flat_map(|p| p.regex.find_iter(text).map(|m| m.as_str().to_string()));
    unique(hits)
}

/// Keep the first occurrence of each item
pub fn unique<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
