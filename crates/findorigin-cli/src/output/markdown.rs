//! Markdown output formatter

use super::entity_sections;
use findorigin_core::{Entities, FindResult};

pub fn format_entities(entities: &Entities, query: &str) -> String {
    let mut output = String::from("# Entities\n\n");

    for (title, values) in entity_sections(entities) {
        if values.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", title));
        for value in values {
            output.push_str(&format!("- {}\n", value));
        }
        output.push('\n');
    }

    output.push_str(&format!("**Query:** {}\n", query));
    output
}

pub fn format_find_result(result: &FindResult) -> String {
    let mut output = String::from("# Sources\n\n");

    if result.sources.is_empty() {
        output.push_str("_No sources found._\n");
    }

    for (i, source) in result.sources.iter().enumerate() {
        output.push_str(&format!(
            "{}. [{}]({}) ({})\n",
            i + 1,
            source.title,
            source.url,
            source.confidence
        ));
        if let Some(ref description) = source.description {
            output.push_str(&format!("   {}\n", description));
        }
    }

    if let Some(ref summary) = result.summary {
        output.push_str(&format!("\n> {}\n", summary));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use findorigin_core::{Confidence, SourceSuggestion};

    #[test]
    fn test_markdown_sources() {
        let result = FindResult {
            sources: vec![SourceSuggestion {
                url: "https://b.ru".into(),
                title: "B".into(),
                confidence: Confidence::High,
                description: None,
            }],
            summary: None,
        };
        let output = format_find_result(&result);
        assert!(output.contains("1. [B](https://b.ru) (high)\n"));
        assert!(!output.contains('>'));
    }

    #[test]
    fn test_markdown_entities() {
        let entities = Entities {
            names: vec!["Росстат".into()],
            ..Default::default()
        };
        let output = format_entities(&entities, "Росстат");
        assert!(output.contains("## Names\n\n- Росстат\n"));
        assert!(!output.contains("## Dates"));
    }
}
