//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::pipeline::RagPipeline;
use crate::providers::{EmbeddingProvider, GroqClient, LlmProvider, OllamaEmbedder};
use crate::retrieval::{ElasticsearchClient, Retriever, SearchIndexProvider};

/// Shared application state.
///
/// Client handles are constructed once at startup and shared across all
/// concurrent requests; nothing here is mutated after initialization.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// Embedding provider
    embedder: Arc<dyn EmbeddingProvider>,
    /// Search index provider
    index: Arc<dyn SearchIndexProvider>,
    /// LLM provider
    llm: Arc<dyn LlmProvider>,
    /// The RAG pipeline
    pipeline: RagPipeline,
}

impl AppState {
    /// Create new application state from configuration
    pub fn new(config: RagConfig) -> Result<Self> {
        tracing::info!("Initializing RAG application state...");

        let embedder: Arc<dyn EmbeddingProvider> =
            Arc::new(OllamaEmbedder::new(&config.embedding)?);
        tracing::info!(
            "Embedder initialized (model: {}, dimensions: {})",
            config.embedding.model,
            config.embedding.dimensions
        );

        let index: Arc<dyn SearchIndexProvider> =
            Arc::new(ElasticsearchClient::new(&config.elasticsearch)?);
        tracing::info!(
            "Search index client initialized (index: {})",
            config.elasticsearch.index
        );

        let llm: Arc<dyn LlmProvider> = Arc::new(GroqClient::new(&config.llm)?);
        tracing::info!("LLM client initialized (model: {})", config.llm.model);

        let retriever = Retriever::new(Arc::clone(&embedder), Arc::clone(&index));
        let pipeline = RagPipeline::new(retriever, Arc::clone(&llm), config.retrieval.top_k);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                embedder,
                index,
                llm,
                pipeline,
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the RAG pipeline
    pub fn pipeline(&self) -> &RagPipeline {
        &self.inner.pipeline
    }

    /// Check all upstream services, returning true only when every one of
    /// them is reachable.
    pub async fn upstreams_healthy(&self) -> bool {
        let (index, embedder, llm) = tokio::join!(
            self.inner.index.health_check(),
            self.inner.embedder.health_check(),
            self.inner.llm.health_check(),
        );

        let index_ok = index.unwrap_or(false);
        let embedder_ok = embedder.unwrap_or(false);
        let llm_ok = llm.unwrap_or(false);

        if !index_ok {
            tracing::warn!("search index {} unreachable", self.inner.index.name());
        }
        if !embedder_ok {
            tracing::warn!("embedder {} unreachable", self.inner.embedder.name());
        }
        if !llm_ok {
            tracing::warn!("LLM provider {} unreachable", self.inner.llm.name());
        }

        index_ok && embedder_ok && llm_ok
    }
}
