//! Configuration for the RAG service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main RAG service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Elasticsearch index configuration
    #[serde(default)]
    pub elasticsearch: ElasticsearchConfig,
    /// Embedding service configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// LLM (Groq) configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl RagConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: RagConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from `POKEDEX_RAG_CONFIG` (if set) or defaults,
    /// with environment variable overrides applied either way.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("POKEDEX_RAG_CONFIG") {
            return Self::from_file(path);
        }

        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// `ES_HOST` overrides the Elasticsearch base URL and `GROQ_API_KEY`
    /// supplies the LLM API key.
    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("ES_HOST") {
            self.elasticsearch.base_url = host;
        }
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            self.llm.api_key = key;
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Elasticsearch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticsearchConfig {
    /// Base URL of the Elasticsearch cluster
    pub base_url: String,
    /// Index holding the Pokédex records
    pub index: String,
    /// KNN candidate pool size (oversampling before ranking)
    pub num_candidates: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://elasticsearch:9200".to_string(),
            index: "pk".to_string(),
            num_candidates: 100,
            timeout_secs: 30,
        }
    }
}

/// Embedding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of the embedding server
    pub base_url: String,
    /// Embedding model name
    pub model: String,
    /// Embedding dimensions (must match the index mapping)
    pub dimensions: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "paraphrase-multilingual-mpnet-base-v2".to_string(),
            dimensions: 768,
            timeout_secs: 30,
        }
    }
}

/// LLM (Groq) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// API key (usually supplied via `GROQ_API_KEY`)
    #[serde(default)]
    pub api_key: String,
    /// Generation model name
    pub model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: String::new(),
            model: "llama-3.2-90b-vision-preview".to_string(),
            temperature: 0.7,
            timeout_secs: 120,
            max_retries: 2,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of records to retrieve per query
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}
