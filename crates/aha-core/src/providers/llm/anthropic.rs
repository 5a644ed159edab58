use super::{map_http_error, Completion, GenerateParams, LlmClient};
use crate::errors::ProviderError;
use crate::model::{Content, ContentPart};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Judge backed by the Anthropic messages API.
pub struct AnthropicClient {
    pub model: String,
    pub api_key: String,
    pub temperature: Option<f32>,
    pub max_tokens: u32,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(model: String, api_key: String, params: GenerateParams) -> Self {
        Self {
            model,
            api_key,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        let mut body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [{"role": "user", "content": prompt}],
        });
        if let Some(t) = self.temperature {
            body["temperature"] = json!(t);
        }
        body
    }

    fn parse_response(&self, body: &serde_json::Value) -> anyhow::Result<Completion> {
        let blocks = body
            .get("content")
            .and_then(|v| v.as_array())
            .ok_or(ProviderError::MalformedResponse {
                provider: "anthropic",
            })?;

        let mut parts = Vec::with_capacity(blocks.len());
        for block in blocks {
            match serde_json::from_value::<ContentPart>(block.clone()) {
                Ok(part) => parts.push(part),
                Err(e) => debug!(error = %e, "skipping unrecognized content block"),
            }
        }

        let content = if parts.len() == 1 && parts[0].kind == "text" {
            Content::Text(parts[0].text.clone().unwrap_or_default())
        } else {
            Content::Parts(parts)
        };
        let stop_reason = body
            .get("stop_reason")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Ok(Completion {
            content,
            provider: "anthropic".to_string(),
            model: self.model.clone(),
            stop_reason,
        })
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<Completion> {
        let url = format!("{}/messages", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            return Err(map_http_error("anthropic", status, error_text).into());
        }

        let body: serde_json::Value = resp.json().await?;
        self.parse_response(&body)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
