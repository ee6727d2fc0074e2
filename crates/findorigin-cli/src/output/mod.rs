//! Output formatters

pub mod html;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use findorigin_core::{Entities, FindResult};

/// Format extracted entities together with the derived query
pub fn format_entities(entities: &Entities, query: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_entities(entities, query),
        OutputFormat::Md => markdown::format_entities(entities, query),
        OutputFormat::Html => html::format_entities(entities, query),
        OutputFormat::Cli => terminal::format_entities(entities, query),
    }
}

/// Format suggested sources
pub fn format_find_result(result: &FindResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_find_result(result),
        OutputFormat::Md => markdown::format_find_result(result),
        OutputFormat::Html => html::format_find_result(result),
        OutputFormat::Cli => terminal::format_find_result(result),
    }
}

/// Entity sections in display order
pub(crate) fn entity_sections(entities: &Entities) -> [(&'static str, &[String]); 5] {
    [
        ("Claims", entities.claims.as_slice()),
        ("Dates", entities.dates.as_slice()),
        ("Numbers", entities.numbers.as_slice()),
        ("Names", entities.names.as_slice()),
        ("Links", entities.links.as_slice()),
    ]
}
