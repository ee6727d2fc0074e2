//! Terminal output formatter

use super::entity_sections;
use findorigin_core::{Entities, FindResult};

pub fn format_entities(entities: &Entities, query: &str) -> String {
    let mut output = String::new();

    for (title, values) in entity_sections(entities) {
        if values.is_empty() {
            continue;
        }
        output.push_str(&format!("{}:\n", title));
        for value in values {
            output.push_str(&format!("  {}\n", value));
        }
    }

    output.push_str(&format!("Query: {}\n", query));
    output
}

pub fn format_find_result(result: &FindResult) -> String {
    let mut output = String::new();

    if result.sources.is_empty() {
        output.push_str("No sources found.\n");
    }

    for (i, source) in result.sources.iter().enumerate() {
        output.push_str(&format!("{:>2}. {}\n", i + 1, source.title));
        output.push_str(&format!("    {}\n", source.url));
        if let Some(ref description) = source.description {
            output.push_str(&format!("    {}\n", description));
        }
        output.push_str(&format!("    confidence: {}\n", source.confidence));
    }

    if let Some(ref summary) = result.summary {
        output.push_str(&format!("\n{}\n", summary));
    }

    output
}
