//! Completion endpoint client
//!
//! Sends the instructional system prompt plus the user task to an
//! OpenAI-compatible chat completions endpoint and returns the text of the
//! first choice. Transport failures and malformed bodies are hard failures
//! for the current request; nothing is retried.

use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// The seam between the pipeline and the remote completion endpoint.
///
/// The pipeline only ever needs "prompt in, raw completion text out", so
/// tests can substitute a scripted provider without any network.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Return the raw text of the top completion choice for `task`.
    async fn complete(&self, system_prompt: &str, task: &str)
        -> Result<String, ProviderError>;
}

/// Chat completions client with bearer authentication
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl CompletionClient {
    /// Create a new client for the given credential and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
            base_url: scriptforge_foundation::config::DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Use a custom endpoint URL (proxies, self-hosted gateways)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom transport timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        self
    }

    fn build_request(&self, system_prompt: &str, task: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: task.to_string(),
                },
            ],
        }
    }
}

#[async_trait]
impl CompletionProvider for CompletionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        task: &str,
    ) -> Result<String, ProviderError> {
        let request = self.build_request(system_prompt, task);

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Completion request failed");
            return Err(ProviderError::from_http_status(status.as_u16(), &body));
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        extract_content(api_response)
    }
}

/// Pull the first choice's message text out of a decoded response
fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("No choices in response".to_string()))?;

    Ok(choice.message.content)
}

// ============================================================================
// Chat Completions API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let client = CompletionClient::new("key", "gpt-4o-mini");
        let request = client.build_request("be helpful", "count Fridays");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "count Fridays");
    }

    #[test]
    fn test_extract_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"first"}},
                           {"message":{"role":"assistant","content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(response).unwrap(), "first");
    }

    #[test]
    fn test_empty_choices_rejected() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = extract_content(response).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
        assert!(err.to_string().contains("choices"));
    }

    #[test]
    fn test_absent_choices_field_rejected() {
        let response: ChatResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_content(response).is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let client = CompletionClient::new("key", "gpt-4o-mini")
            .with_base_url("http://localhost:9999/v1/chat/completions");
        assert_eq!(
            client.base_url,
            "http://localhost:9999/v1/chat/completions"
        );
    }
}
