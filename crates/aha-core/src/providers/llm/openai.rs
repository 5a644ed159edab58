use super::{map_http_error, Completion, GenerateParams, LlmClient};
use crate::errors::ProviderError;
use crate::model::Content;
use async_trait::async_trait;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Judge backed by the OpenAI chat completions API.
pub struct OpenAIClient {
    pub model: String,
    pub api_key: String,
    pub temperature: Option<f32>,
    pub max_tokens: u32,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAIClient {
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
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.max_tokens,
        });
        if let Some(t) = self.temperature {
            body["temperature"] = json!(t);
        }
        body
    }

    fn parse_response(&self, body: &serde_json::Value) -> anyhow::Result<Completion> {
        let text = body
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or(ProviderError::MalformedResponse { provider: "openai" })?
            .to_string();
        let stop_reason = body
            .pointer("/choices/0/finish_reason")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Ok(Completion {
            content: Content::Text(text),
            provider: "openai".to_string(),
            model: self.model.clone(),
            stop_reason,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<Completion> {
        let url = format!("{}/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            return Err(map_http_error("openai", status, error_text).into());
        }

        let body: serde_json::Value = resp.json().await?;
        self.parse_response(&body)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
