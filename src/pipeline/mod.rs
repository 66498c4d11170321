//! RAG orchestration: retrieve, prompt, generate, parse, evaluate

use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;
use crate::evaluation::RelevanceEvaluator;
use crate::generation::{AnswerParser, PromptBuilder};
use crate::providers::LlmProvider;
use crate::retrieval::Retriever;
use crate::types::response::RagResponse;

/// The RAG pipeline, run once per query.
///
/// Stages run strictly in sequence: retrieve, build prompt, generate, parse
/// answer, evaluate relevance. Retrieval and generation failures abort the
/// run; an unparseable answer does not, because the raw text is still
/// informative.
pub struct RagPipeline {
    retriever: Retriever,
    llm: Arc<dyn LlmProvider>,
    evaluator: RelevanceEvaluator,
    default_top_k: usize,
}

impl RagPipeline {
    /// Create a new pipeline
    pub fn new(retriever: Retriever, llm: Arc<dyn LlmProvider>, default_top_k: usize) -> Self {
        let evaluator = RelevanceEvaluator::new(Arc::clone(&llm));
        Self {
            retriever,
            llm,
            evaluator,
            default_top_k,
        }
    }

    /// Run the pipeline with the configured top_k
    pub async fn run(&self, query: &str) -> Result<RagResponse> {
        self.run_with_top_k(query, self.default_top_k).await
    }

    /// Run the pipeline for one query, retrieving up to `top_k` records
    pub async fn run_with_top_k(&self, query: &str, top_k: usize) -> Result<RagResponse> {
        let start = Instant::now();
        tracing::info!("RAG query: \"{}\"", query);

        let search_results = self.retriever.search(query, top_k).await?;

        let context = PromptBuilder::build_context(&search_results);
        let prompt = PromptBuilder::build_analysis_prompt(query, &context);

        let completion = self.llm.complete(&prompt).await?;
        tracing::info!(
            model = self.llm.model(),
            total_tokens = completion.usage.total_tokens,
            "answer generated"
        );

        // Unparseable output degrades to null structured fields
        let envelope = AnswerParser::parse(&completion.text).unwrap_or_default();

        let (verdict, eval_usage) = self.evaluator.evaluate(query, &completion.text).await?;

        let response_time = start.elapsed().as_secs_f64();
        tracing::info!(
            response_time,
            relevance = %verdict.relevance,
            "RAG query completed"
        );

        Ok(RagResponse {
            answer: completion.text,
            model_used: self.llm.model().to_string(),
            response_time,
            relevance: verdict.relevance,
            relevance_explanation: verdict.relevance_explanation,
            prompt_tokens: completion.usage.prompt_tokens,
            completion_tokens: completion.usage.completion_tokens,
            total_tokens: completion.usage.total_tokens,
            eval_prompt_tokens: eval_usage.prompt_tokens,
            eval_completion_tokens: eval_usage.completion_tokens,
            eval_total_tokens: eval_usage.total_tokens,
            pokemon_entries: envelope.pokemon_entries,
            summary: envelope.summary,
            search_results,
        })
    }
}
