//! Generation service selected at runtime.

use crate::config::{ProviderKind, ProviderSettings};
use crate::error::{CliError, Result};
use std::time::Duration;
use swot_domain::traits::LlmProvider;
use swot_llm::{gemini, ollama, GeminiProvider, LlmError, OllamaProvider};
use tracing::debug;

/// Model used with Ollama when none is configured
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1";

/// One of the supported services
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Local Ollama server
    Ollama(OllamaProvider),
}

impl Provider {
    /// Build the provider described by `settings`
    ///
    /// `api_key` is the key resolved from the command line or environment;
    /// it takes precedence over the one in the configuration file.
    pub fn from_settings(settings: &ProviderSettings, api_key: Option<String>) -> Result<Self> {
        let timeout = settings.timeout_secs.map(Duration::from_secs);

        match settings.kind {
            ProviderKind::Gemini => {
                let api_key = api_key
                    .or_else(|| settings.api_key.clone())
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| {
                        CliError::Config(
                            "No API key found. Set GEMINI_API_KEY or pass --api-key".to_string(),
                        )
                    })?;
                let model = settings.model.as_deref().unwrap_or(gemini::DEFAULT_MODEL);

                let mut provider = GeminiProvider::new(api_key, model);
                if let Some(endpoint) = &settings.endpoint {
                    provider = provider.with_endpoint(endpoint);
                }
                if let Some(timeout) = timeout {
                    provider = provider.with_timeout(timeout)?;
                }
                debug!(model, endpoint = ?settings.endpoint, "Using Gemini provider");
                Ok(Provider::Gemini(provider))
            }
            ProviderKind::Ollama => {
                let endpoint = settings.endpoint.as_deref().unwrap_or(ollama::DEFAULT_ENDPOINT);
                let model = settings.model.as_deref().unwrap_or(DEFAULT_OLLAMA_MODEL);

                let mut provider = OllamaProvider::new(endpoint, model);
                if let Some(timeout) = timeout {
                    provider = provider.with_timeout(timeout)?;
                }
                debug!(model, endpoint, "Using Ollama provider");
                Ok(Provider::Ollama(provider))
            }
        }
    }
}

impl LlmProvider for Provider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        match self {
            Provider::Gemini(p) => LlmProvider::model_name(p),
            Provider::Ollama(p) => LlmProvider::model_name(p),
        }
    }

    async fn generate_structured(&self, prompt: &str, schema: &str) -> std::result::Result<String, LlmError> {
        match self {
            Provider::Gemini(p) => p.generate_structured(prompt, schema).await,
            Provider::Ollama(p) => p.generate_structured(prompt, schema).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_requires_api_key() {
        let settings = ProviderSettings::default();
        let result = Provider::from_settings(&settings, None);
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = Provider::from_settings(&settings, Some("   ".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_gemini_defaults() {
        let provider = Provider::from_settings(&ProviderSettings::default(), Some("key".into())).unwrap();
        assert!(matches!(provider, Provider::Gemini(_)));
        assert_eq!(provider.model_name(), gemini::DEFAULT_MODEL);
    }

    #[test]
    fn test_api_key_from_config_file() {
        let settings = ProviderSettings {
            api_key: Some("from-file".to_string()),
            model: Some("gemini-2.5-pro".to_string()),
            ..ProviderSettings::default()
        };
        let provider = Provider::from_settings(&settings, None).unwrap();
        assert_eq!(provider.model_name(), "gemini-2.5-pro");
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let settings = ProviderSettings {
            kind: ProviderKind::Ollama,
            timeout_secs: Some(30),
            ..ProviderSettings::default()
        };
        let provider = Provider::from_settings(&settings, None).unwrap();
        assert!(matches!(provider, Provider::Ollama(_)));
        assert_eq!(provider.model_name(), DEFAULT_OLLAMA_MODEL);
    }
}
