use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::llm::{ollama, openai, LlmClient, OllamaClient, OpenAiClient};

/// Which backend `build_client` talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Ollama,
    OpenAi,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAi),
            other => anyhow::bail!("Unknown provider '{}': expected 'ollama' or 'openai'", other),
        }
    }
}

/// Provider settings, from a JSON file or the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl ProviderConfig {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read provider config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse provider config {}", path.display()))
    }

    /// Build settings from `REPLYKIT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply any `REPLYKIT_*` variables that are set on top of these settings
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(provider) = lookup("REPLYKIT_PROVIDER") {
            self.provider = provider.parse()?;
        }
        if let Some(base_url) = lookup("REPLYKIT_BASE_URL") {
            self.base_url = Some(base_url);
        }
        if let Some(key) = lookup("REPLYKIT_API_KEY").or_else(|| lookup("OPENAI_API_KEY")) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup("REPLYKIT_MODEL") {
            self.model = Some(model);
        }
        Ok(self)
    }

    /// The configured model, or the provider's usual default
    pub fn default_model(&self) -> &str {
        match (&self.model, self.provider) {
            (Some(model), _) => model.as_str(),
            (None, ProviderKind::Ollama) => ollama::DEFAULT_MODEL,
            (None, ProviderKind::OpenAi) => openai::DEFAULT_MODEL,
        }
    }

    /// Construct the client these settings describe
    pub fn build_client(&self) -> Box<dyn LlmClient> {
        match self.provider {
            ProviderKind::Ollama => {
                let base_url = self.base_url.as_deref().unwrap_or(ollama::DEFAULT_BASE_URL);
                log::debug!("Using Ollama at {}", base_url);
                Box::new(OllamaClient::with_base_url(base_url))
            }
            ProviderKind::OpenAi => {
                let base_url = self.base_url.as_deref().unwrap_or(openai::DEFAULT_BASE_URL);
                log::debug!("Using OpenAI-compatible endpoint at {}", base_url);
                let client = match &self.api_key {
                    Some(key) => OpenAiClient::new(key.clone()).with_base_url(base_url),
                    None => OpenAiClient::anonymous(base_url),
                };
                Box::new(client)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_ollama() {
        let config = ProviderConfig::default().with_overrides(env(&[])).unwrap();
        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.default_model(), "llama3.2:latest");
    }

    #[test]
    fn env_selects_openai_and_falls_back_to_openai_key() {
        let config = ProviderConfig::default()
            .with_overrides(env(&[
                ("REPLYKIT_PROVIDER", "OpenAI"),
                ("OPENAI_API_KEY", "sk-test"),
                ("REPLYKIT_MODEL", "gpt-4o"),
            ]))
            .unwrap();

        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.default_model(), "gpt-4o");
    }

    #[test]
    fn replykit_key_wins_over_openai_key() {
        let config = ProviderConfig::default()
            .with_overrides(env(&[
                ("REPLYKIT_API_KEY", "primary"),
                ("OPENAI_API_KEY", "fallback"),
            ]))
            .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn blank_variables_are_ignored() {
        let base = ProviderConfig {
            base_url: Some("http://gpu-box:11434".to_string()),
            ..Default::default()
        };
        let config = base.with_overrides(env(&[("REPLYKIT_BASE_URL", "  ")])).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://gpu-box:11434"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = ProviderConfig::default()
            .with_overrides(env(&[("REPLYKIT_PROVIDER", "bard")]))
            .unwrap_err();
        assert!(err.to_string().contains("bard"));
    }

    #[test]
    fn parses_partial_json() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"provider": "openai", "base_url": "http://localhost:1337/v1"}"#)
                .unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:1337/v1"));
        assert!(config.api_key.is_none());
        assert_eq!(config.default_model(), "gpt-4o-mini");
    }

    #[test]
    fn load_reads_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("provider.json");
        fs::write(
            &path,
            r#"{"provider": "openai", "api_key": "sk-file", "model": "gpt-4o"}"#,
        )
        .unwrap();

        let config = ProviderConfig::load(&path).unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.api_key.as_deref(), Some("sk-file"));
        assert_eq!(config.default_model(), "gpt-4o");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.json");

        let err = ProviderConfig::load(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to read provider config"));
        assert!(message.contains("absent.json"));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ provider: ").unwrap();

        let err = ProviderConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse provider config"));
    }
}
