//! pokedex-rag: Retrieval-augmented Pokédex analysis
//!
//! This crate serves a RAG pipeline over a vector-indexed Pokédex: queries are
//! embedded, similar Pokémon records are retrieved from Elasticsearch by KNN
//! search, and an LLM produces a structured analysis of the retrieved records
//! plus an independent relevance self-evaluation.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod pipeline;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use pipeline::RagPipeline;
pub use types::{
    analysis::{AnalysisEntry, AnswerEnvelope},
    record::PokemonRecord,
    response::{QueryRequest, RagResponse},
};
