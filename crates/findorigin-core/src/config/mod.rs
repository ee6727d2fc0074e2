//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Completion service configuration
    #[serde(default)]
    pub completion: CompletionConfig,
}

/// Chat-completion service configuration for source discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Full URL of the chat/completions endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Model identifiers in priority order, highest quality first and an
    /// always-available catch-all last
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Bearer credential
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Wait before retrying the first model after a rate limit
    #[serde(default = "default_backoff")]
    pub rate_limit_backoff_ms: u64,

    /// Transport timeout in seconds (unset: no client-side timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            models: default_models(),
            api_key: default_api_key(),
            temperature: default_temperature(),
            rate_limit_backoff_ms: default_backoff(),
            timeout_secs: None,
        }
    }
}

/// Built-in fallback chain
pub const DEFAULT_MODELS: &[&str] = &[
    "openai/gpt-oss-120b:free",
    "meta-llama/llama-3.3-70b-instruct:free",
    "openrouter/free",
];

/// Built-in completion endpoint
pub const DEFAULT_COMPLETION_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

fn default_url() -> String {
    std::env::var("FINDORIGIN_COMPLETION_URL")
        .unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string())
}

fn default_models() -> Vec<String> {
    match std::env::var("FINDORIGIN_MODELS") {
        Ok(list) if !list.trim().is_empty() => parse_model_list(&list),
        _ => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
    }
}

fn default_api_key() -> Option<String> {
    std::env::var("FINDORIGIN_API_KEY")
        .or_else(|_| std::env::var("OPENROUTER_API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

fn default_temperature() -> f32 {
    0.3
}

fn default_backoff() -> u64 {
    3000
}

/// Parse a comma-separated model list, skipping blank entries
pub fn parse_model_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from an explicit path, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_model_list() {
        assert_eq!(
            parse_model_list(" a/b:free, ,c/d "),
            vec!["a/b:free".to_string(), "c/d".to_string()]
        );
        assert!(parse_model_list("").is_empty());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.completion.temperature, 0.3);
        assert_eq!(config.completion.rate_limit_backoff_ms, 3000);
        assert!(config.completion.timeout_secs.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(
            &path,
            "completion:\n  models: [\"x/only\"]\n  rate_limit_backoff_ms: 10\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.completion.models, vec!["x/only".to_string()]);
        assert_eq!(config.completion.rate_limit_backoff_ms, 10);
        assert_eq!(config.completion.temperature, 0.3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yml");

        let mut config = Config::default();
        config.completion.models = vec!["m1".into(), "m2".into()];
        config.completion.timeout_secs = Some(45);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.completion.models, config.completion.models);
        assert_eq!(loaded.completion.timeout_secs, Some(45));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "completion: [unclosed\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::FindOriginError::Yaml(_)));
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory exists at the path but cannot be read as a file
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, crate::FindOriginError::Io(_)));
    }
}
