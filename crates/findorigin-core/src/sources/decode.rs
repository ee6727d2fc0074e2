//! Recovery of the JSON payload from free-form model output

use super::{FindResult, SourceSuggestion};
use crate::error::{FindOriginError, Result};
use regex::Regex;
use serde::Deserialize;

/// Characters of model content quoted in decode errors
const CONTENT_EXCERPT_CHARS: usize = 200;

lazy_static::lazy_static! {
    static ref CODE_FENCE_RE: Regex = Regex::new(r"(?i)\s*```(?:json)?\s*").unwrap();
}

/// Remove triple-backtick fence markers (with an optional `json` tag) and
/// surrounding whitespace.
pub fn strip_code_fence(content: &str) -> String {
    CODE_FENCE_RE.replace_all(content, "").trim().to_string()
}

/// First `max_chars` characters of `text`, with an ellipsis when cut
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatReplyMessage>,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull `choices[0].message.content` out of a completion response body.
pub fn parse_reply_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        FindOriginError::SourceQuery(format!(
            "malformed completion response ({}): {}",
            e,
            excerpt(body, CONTENT_EXCERPT_CHARS)
        ))
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| FindOriginError::SourceQuery("empty response from model".to_string()))
}

#[derive(Deserialize)]
struct RawFindResult {
    #[serde(default)]
    sources: serde_json::Value,
    #[serde(default)]
    summary: Option<String>,
}

/// Decode model content into a [`FindResult`].
///
/// A `sources` value that is not an array becomes an empty list; an array
/// with malformed entries is a decode error.
pub fn decode_find_result(content: &str) -> Result<FindResult> {
    let invalid = |e: serde_json::Error| {
        FindOriginError::SourceQuery(format!(
            "model returned invalid JSON ({}): {}",
            e,
            excerpt(content, CONTENT_EXCERPT_CHARS)
        ))
    };

    let json = strip_code_fence(content);
    let raw: RawFindResult = serde_json::from_str(&json).map_err(invalid)?;

    let sources = match raw.sources {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value::<SourceSuggestion>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(invalid)?,
        other => {
            if !other.is_null() {
                tracing::debug!("Ignoring non-array sources value: {}", other);
            }
            Vec::new()
        }
    };

    Ok(FindResult {
        sources,
        summary: raw.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Confidence;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```JSON {\"a\":1} ```  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("привет", 3), "при...");
        assert_eq!(excerpt("abc", 3), "abc");
        assert_eq!(excerpt("", 10), "");
    }

    #[test]
    fn test_parse_reply_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  {\"sources\":[]}  "}}]}"#;
        assert_eq!(parse_reply_content(body).unwrap(), "{\"sources\":[]}");
    }

    #[test]
    fn test_parse_reply_content_empty() {
        for body in [
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{"content":"   "}}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{}"#,
        ] {
            let err = parse_reply_content(body).unwrap_err();
            assert!(err.to_string().contains("empty response"), "{}", body);
        }
    }

    #[test]
    fn test_parse_reply_content_malformed_body() {
        let err = parse_reply_content("<html>bad gateway</html>").unwrap_err();
        assert!(err.to_string().contains("<html>bad gateway</html>"));
    }

    #[test]
    fn test_decode_full_result() {
        let content = r#"```json
{"sources":[{"url":"https://minfin.gov.ru","title":"Минфин","confidence":"высокая","description":"Официальный сайт"}],"summary":"Найдено"}
```"#;
        let result = decode_find_result(content).unwrap();
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].confidence, Confidence::High);
        assert_eq!(
            result.sources[0].description.as_deref(),
            Some("Официальный сайт")
        );
        assert_eq!(result.summary.as_deref(), Some("Найдено"));
    }

    #[test]
    fn test_decode_non_array_sources() {
        let result = decode_find_result(r#"{"sources":"none","summary":"x"}"#).unwrap();
        assert!(result.sources.is_empty());
        assert_eq!(result.summary.as_deref(), Some("x"));

        let result = decode_find_result(r#"{"summary":"nothing"}"#).unwrap();
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_decode_invalid_json_quotes_content() {
        let err = decode_find_result("Sorry, I cannot help with that").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid JSON"));
        assert!(message.contains("Sorry, I cannot help"));
    }

    #[test]
    fn test_decode_rejects_malformed_entry() {
        let err = decode_find_result(r#"{"sources":[{"title":"no url"}]}"#).unwrap_err();
        assert!(matches!(err, FindOriginError::SourceQuery(_)));
    }
}
