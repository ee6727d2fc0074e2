//! Source discovery
//!
//! Asks a remote completion service for candidate sources of a text and
//! decodes the constrained JSON answer.

mod decode;
mod finder;

pub use decode::{decode_find_result, excerpt, parse_reply_content, strip_code_fence};
pub use finder::{
    find_sources, AttemptOutcome, ModelAttempt, ModelChain, SourceFinder, SYSTEM_PROMPT,
};

use serde::{Deserialize, Deserializer, Serialize};

/// How likely a suggested source holds the information, as judged by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    /// Missing or unrecognised label
    #[default]
    Unknown,
}

impl Confidence {
    /// Map a model-provided label, English or Russian, to a variant
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" | "высокая" => Confidence::High,
            "medium" | "средняя" => Confidence::Medium,
            "low" | "низкая" => Confidence::Low,
            _ => Confidence::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Unknown => "unknown",
        }
    }

    /// Localized label for chat replies
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "высокая",
            Confidence::Medium => "средняя",
            Confidence::Low => "низкая",
            Confidence::Unknown => "неизвестна",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(label) => Confidence::from_label(&label),
            _ => Confidence::Unknown,
        })
    }
}

/// One candidate source suggested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSuggestion {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Outcome of one source query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FindResult {
    pub sources: Vec<SourceSuggestion>,
    /// Short conclusion; explains an empty `sources`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_labels() {
        assert_eq!(Confidence::from_label("high"), Confidence::High);
        assert_eq!(Confidence::from_label(" Высокая "), Confidence::High);
        assert_eq!(Confidence::from_label("СРЕДНЯЯ"), Confidence::Medium);
        assert_eq!(Confidence::from_label("low"), Confidence::Low);
        assert_eq!(Confidence::from_label("certain"), Confidence::Unknown);
        assert_eq!(Confidence::Medium.label(), "средняя");
        assert_eq!(Confidence::Low.to_string(), "low");
    }

    #[test]
    fn test_confidence_lenient_decode() {
        let parsed: Vec<Confidence> =
            serde_json::from_str(r#"["низкая", "HIGH", 0.9, null, "maybe"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Confidence::Low,
                Confidence::High,
                Confidence::Unknown,
                Confidence::Unknown,
                Confidence::Unknown
            ]
        );
    }

    #[test]
    fn test_suggestion_defaults() {
        let s: SourceSuggestion =
            serde_json::from_str(r#"{"url":"https://a.ru","title":"A"}"#).unwrap();
        assert_eq!(s.confidence, Confidence::Unknown);
        assert!(s.description.is_none());
    }

    #[test]
    fn test_find_result_serialization() {
        let result = FindResult {
            sources: vec![SourceSuggestion {
                url: "https://a.ru".into(),
                title: "A".into(),
                confidence: Confidence::High,
                description: None,
            }],
            summary: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sources"][0]["confidence"], "high");
        assert!(json.get("summary").is_none());
        assert!(json["sources"][0].get("description").is_none());
    }
}
