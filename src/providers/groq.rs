//! Groq chat-completions client with retry logic

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::LlmConfig;
use crate::error::{Error, Result};

use super::llm::{Completion, LlmProvider, TokenUsage};

/// Client for the Groq OpenAI-compatible chat completions API.
///
/// Each completion is a single user message; there is no conversation state
/// between calls.
pub struct GroqClient {
    client: Client,
    config: LlmConfig,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: TokenUsage,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            tracing::warn!("GROQ_API_KEY not set; completion requests will be rejected upstream");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Retry a request with exponential backoff
    async fn retry_request<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.config.max_retries {
                        let delay = Duration::from_secs(2u64.pow(attempt));
                        tracing::warn!(
                            "LLM request failed (attempt {}/{}), retrying in {:?}",
                            attempt + 1,
                            self.config.max_retries + 1,
                            delay
                        );
                        sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Generation("unknown error".to_string())))
    }

    async fn send_completion(&self, prompt: &str) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Generation(format!("completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!(
                "completion failed: HTTP {} - {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("failed to parse completion response: {}", e)))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Generation("completion returned no choices".to_string()))?;

        Ok(Completion {
            text,
            usage: chat_response.usage,
        })
    }
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        self.retry_request(|| self.send_completion(prompt)).await
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.config.base_url);

        match self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
