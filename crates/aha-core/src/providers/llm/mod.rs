pub mod anthropic;
pub mod fake;
pub mod openai;

use crate::errors::ProviderError;
use crate::model::Content;
use async_trait::async_trait;
use std::sync::Arc;

/// Sampling settings applied to every judge call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateParams {
    pub temperature: Option<f32>,
    pub max_tokens: u32,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            temperature: Some(0.0),
            max_tokens: 1024,
        }
    }
}

/// One model completion, before any verdict parsing.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: Content,
    pub provider: String,
    pub model: String,
    pub stop_reason: Option<String>,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<Completion>;
    fn provider_name(&self) -> &'static str;
}

/// Builds a client for a provider/model pair.
pub trait ClientFactory: Send + Sync {
    fn client_for(
        &self,
        provider: &str,
        model: &str,
        params: &GenerateParams,
    ) -> anyhow::Result<Arc<dyn LlmClient>>;
}

/// Resolves API keys and base URLs from the environment.
pub struct EnvClientFactory;

impl ClientFactory for EnvClientFactory {
    fn client_for(
        &self,
        provider: &str,
        model: &str,
        params: &GenerateParams,
    ) -> anyhow::Result<Arc<dyn LlmClient>> {
        match provider {
            "openai" => {
                let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
                    anyhow::anyhow!("judge 'openai/{}' requires OPENAI_API_KEY", model)
                })?;
                Ok(Arc::new(
                    openai::OpenAIClient::new(model.to_string(), api_key, *params)
                        .with_base_url(std::env::var("OPENAI_BASE_URL").ok()),
                ))
            }
            "anthropic" => {
                let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                    anyhow::anyhow!("judge 'anthropic/{}' requires ANTHROPIC_API_KEY", model)
                })?;
                Ok(Arc::new(
                    anthropic::AnthropicClient::new(model.to_string(), api_key, *params)
                        .with_base_url(std::env::var("ANTHROPIC_BASE_URL").ok()),
                ))
            }
            "fake" => Ok(Arc::new(fake::FakeClient::new(model.to_string()))),
            other => Err(ProviderError::UnknownProvider(other.to_string()).into()),
        }
    }
}

pub(crate) fn map_http_error(provider: &'static str, status: u16, detail: String) -> ProviderError {
    match status {
        401 => ProviderError::Auth { provider, detail },
        429 => ProviderError::RateLimited { provider, detail },
        _ => ProviderError::Api {
            provider,
            status,
            detail,
        },
    }
}
