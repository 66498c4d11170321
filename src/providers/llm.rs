//! LLM provider trait for single-shot text completions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Token usage counters for one completion call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Result of one completion call
#[derive(Debug, Clone)]
pub struct Completion {
    /// Generated text
    pub text: String,
    /// Token accounting as reported by the provider
    pub usage: TokenUsage,
}

/// Trait for LLM-based text generation
///
/// Single-shot completions only: no streaming, no conversation state. Each
/// call is fully independent.
///
/// Implementations:
/// - `GroqClient`: Groq-hosted chat completions (OpenAI-compatible)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the given prompt
    async fn complete(&self, prompt: &str) -> Result<Completion>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
