pub mod error;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::ProviderError;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

/// Who a chat message is from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role/content pair in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// A chat-completion backend
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Creates a chat completion for `messages` and returns the assistant's reply text
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError>;

    /// Sends `prompt` as a single user message
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, ProviderError> {
        self.chat(model, &[ChatMessage::user(prompt)]).await
    }
}

/// Asks `model` for a reply to `prompt` in a one-message conversation.
///
/// The raw reply is returned untouched; pass it through
/// [`clean_response`](crate::sanitize::clean_response) to strip markdown.
/// A blank model name is rejected without contacting the provider.
pub async fn call_model(
    client: &dyn LlmClient,
    prompt: &str,
    model: &str,
) -> Result<String, ProviderError> {
    if model.trim().is_empty() {
        return Err(ProviderError::InvalidArguments(
            "model name must not be empty".to_string(),
        ));
    }

    log::debug!("Requesting completion from {} ({} chars)", model, prompt.len());
    client.complete(prompt, model).await
}

/// Joins a base URL and an endpoint path with exactly one slash between them
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"hello"}"#).unwrap();
        assert_eq!(parsed.role, Role::Assistant);
    }

    #[test]
    fn constructors_set_role() {
        assert_eq!(ChatMessage::system("be brief").role, Role::System);
        assert_eq!(ChatMessage::user("hi").role, Role::User);
        assert_eq!(ChatMessage::system("be brief").content, "be brief");
    }

    #[test]
    fn endpoint_handles_trailing_slashes() {
        assert_eq!(
            endpoint("http://localhost:11434/", "/api/chat"),
            "http://localhost:11434/api/chat"
        );
        assert_eq!(
            endpoint("https://api.openai.com/v1", "chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
