//! JSON output formatter

use findorigin_core::{Entities, FindResult};

pub fn format_entities(entities: &Entities, query: &str) -> String {
    let output = serde_json::json!({
        "entities": entities,
        "query": query,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_find_result(result: &FindResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
