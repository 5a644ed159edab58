use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// Message content, either a plain string or a list of typed parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type", default = "default_part_kind")]
    pub kind: String, // "text", "image", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_part_kind() -> String {
    "text".to_string()
}

impl Content {
    /// Flatten content into a single string. A parts list yields the text of
    /// the first part when it has one, otherwise the parts are rendered as
    /// JSON and joined with single spaces.
    pub fn to_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Parts(parts) => {
                if let Some(text) = parts.first().and_then(|p| p.text.as_ref()) {
                    return text.clone();
                }
                parts
                    .iter()
                    .map(|p| serde_json::to_string(p).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Content,
}

/// Conversation state handed to the judges: the task input plus the message
/// transcript under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskState {
    pub input: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl TaskState {
    /// Text of the last message, or empty when there is no transcript.
    pub fn submission(&self) -> String {
        self.messages
            .last()
            .map(|m| m.content.to_text())
            .unwrap_or_default()
    }
}

/// Grading criterion presented to each judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub text: String,
}
