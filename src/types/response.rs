//! Public request/response types for the query endpoint

use serde::{Deserialize, Serialize};

use crate::evaluation::RelevanceLabel;
use crate::types::analysis::{AnalysisEntry, AnalysisSummary};
use crate::types::record::PokemonRecord;

/// Query request for the RAG endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The query text
    pub query: String,

    /// Number of records to retrieve (default: 5)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    5
}

impl QueryRequest {
    /// Create a new query request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: default_top_k(),
        }
    }
}

/// Unified response of one RAG run.
///
/// Constructed fresh per query by the pipeline and never mutated after
/// return. `pokemon_entries` and `summary` are null when the LLM answer
/// could not be parsed; the raw `answer` text is preserved regardless.
#[derive(Debug, Clone, Serialize)]
pub struct RagResponse {
    /// Raw LLM answer text
    pub answer: String,
    /// Generation model identifier
    pub model_used: String,
    /// Wall-clock latency of the whole pipeline in seconds
    pub response_time: f64,
    /// Relevance classification of the answer
    pub relevance: RelevanceLabel,
    /// Short explanation of the classification
    pub relevance_explanation: String,
    /// Primary completion token usage
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    /// Evaluation completion token usage
    pub eval_prompt_tokens: u32,
    pub eval_completion_tokens: u32,
    pub eval_total_tokens: u32,
    /// Parsed analysis entries (null on parse failure)
    pub pokemon_entries: Option<Vec<AnalysisEntry>>,
    /// Parsed summary (null on parse failure)
    pub summary: Option<AnalysisSummary>,
    /// Records the answer was grounded on, in retrieval order
    pub search_results: Vec<PokemonRecord>,
}
