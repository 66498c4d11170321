//! HTTP embedding client (Ollama-compatible API)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmbeddingConfig;
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;

/// Embedding client for an Ollama-compatible `/api/embeddings` endpoint.
///
/// Retrieval treats embedding as part of the search call: failures surface
/// as retrieval errors and are not retried here.
pub struct OllamaEmbedder {
    client: Client,
    config: EmbeddingConfig,
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    prompt: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbedder {
    /// Create a new embedding client
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.config.base_url);
        let request = EmbedRequest {
            model: self.config.model.clone(),
            prompt: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Retrieval(format!("embedding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Retrieval(format!(
                "embedding failed: HTTP {}",
                response.status()
            )));
        }

        let embed_response: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::Retrieval(format!("failed to parse embedding response: {}", e)))?;

        if embed_response.embedding.len() != self.config.dimensions {
            return Err(Error::Retrieval(format!(
                "embedding dimension mismatch: got {}, index expects {}",
                embed_response.embedding.len(),
                self.config.dimensions
            )));
        }

        Ok(embed_response.embedding)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.config.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
