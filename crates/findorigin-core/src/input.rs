//! Input preparation: normalization and rejection of link references

use crate::error::{FindOriginError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref TELEGRAM_LINK_RE: Regex =
        Regex::new(r"(?i)https?://(?:t\.me|telegram\.me|telegram\.dog)/[a-z0-9_]+(?:/[0-9]+)?")
            .unwrap();
}

/// Where the analyzable text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Direct,
}

/// Text ready for extraction or source discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedInput {
    pub text: String,
    pub source: InputSource,
}

/// Collapse whitespace runs into single spaces and trim
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Check whether the text is a link to a Telegram post
pub fn is_telegram_post_link(text: &str) -> bool {
    TELEGRAM_LINK_RE.is_match(text.trim())
}

/// Validate and normalize raw user input.
///
/// Links to Telegram posts are rejected: the post body cannot be fetched,
/// so the user has to paste the text itself.
pub fn prepare_input(raw: &str) -> Result<PreparedInput> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(FindOriginError::InvalidInput("empty input".to_string()));
    }

    if is_telegram_post_link(trimmed) {
        tracing::debug!("Rejecting Telegram post link: {}", trimmed);
        return Err(FindOriginError::InvalidInput(
            "extracting text from Telegram post links is not supported; \
             copy the post text and send it instead"
                .to_string(),
        ));
    }

    Ok(PreparedInput {
        text: normalize_text(trimmed),
        source: InputSource::Direct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  a \n\n b\t\tc  "), "a b c");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_telegram_links() {
        assert!(is_telegram_post_link("https://t.me/durov/123"));
        assert!(is_telegram_post_link("  HTTP://Telegram.Me/channel_name "));
        assert!(is_telegram_post_link("https://telegram.dog/news"));
        assert!(!is_telegram_post_link("https://example.com/t.me"));
        assert!(!is_telegram_post_link("просто текст"));
    }

    #[test]
    fn test_prepare_input_blank() {
        let err = prepare_input(" \n\t ").unwrap_err();
        assert!(matches!(err, FindOriginError::InvalidInput(_)));
    }

    #[test]
    fn test_prepare_input_rejects_post_link() {
        let err = prepare_input("https://t.me/durov/42").unwrap_err();
        assert!(err.to_string().contains("Telegram"));
    }

    #[test]
    fn test_prepare_input_direct() {
        let prepared = prepare_input("  Газпром   объявил\nо росте ").unwrap();
        assert_eq!(prepared.text, "Газпром объявил о росте");
        assert_eq!(prepared.source, InputSource::Direct);
    }
}
