//! Provider abstractions for embeddings, LLM completions, and the search index
//!
//! The embedder, the Elasticsearch index and the LLM are external services;
//! these traits are the seams the pipeline is tested through.

pub mod embedding;
pub mod groq;
pub mod llm;
pub mod ollama;

pub use embedding::EmbeddingProvider;
pub use groq::GroqClient;
pub use llm::{Completion, LlmProvider, TokenUsage};
pub use ollama::OllamaEmbedder;
