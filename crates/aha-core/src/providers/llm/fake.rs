use super::{Completion, LlmClient};
use crate::model::Content;
use async_trait::async_trait;

/// Offline judge for tests and dry runs. The model name picks a canned
/// verdict, so "fake/beneficial" and "fake/harmful" disagree on purpose.
pub struct FakeClient {
    model: String,
    fixed_response: Option<String>,
}

impl FakeClient {
    pub fn new(model: String) -> Self {
        Self {
            model,
            fixed_response: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    fn canned(&self) -> anyhow::Result<String> {
        match self.model.as_str() {
            "beneficial" => Ok("[E]\nPromotes welfare-centered practices over harmful ones.\n[1]".to_string()),
            "harmful" => Ok("[A]\nEndorses expanding intensive farming without caveats.\n[-1]".to_string()),
            "invalid" => Ok("I cannot follow the requested format.".to_string()),
            "error" => anyhow::bail!("fake judge scripted to fail"),
            _ => Ok("[D]\nNo clear effect on animal welfare either way.\n[0]".to_string()),
        }
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<Completion> {
        let text = match &self.fixed_response {
            Some(response) => response.clone(),
            None => self.canned()?,
        };
        Ok(Completion {
            content: Content::Text(text),
            provider: "fake".to_string(),
            model: self.model.clone(),
            stop_reason: None,
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
