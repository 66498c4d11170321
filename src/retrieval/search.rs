//! Query-time retrieval: embed the query, search the index

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::record::PokemonRecord;

use super::elastic::SearchIndexProvider;

/// Retriever combining the embedder and the search index.
///
/// Retrieval is a plain network call with engine-side reliability; failures
/// surface to the caller unretried.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn SearchIndexProvider>,
}

impl Retriever {
    /// Create a new retriever
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn SearchIndexProvider>) -> Self {
        Self { embedder, index }
    }

    /// Retrieve up to `top_k` records relevant to `query`, ordered by
    /// descending similarity, at most one per dex number.
    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<PokemonRecord>> {
        if query.trim().is_empty() {
            return Err(Error::Config("query must not be empty".to_string()));
        }
        if top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".to_string()));
        }

        let query_vector = self.embedder.embed(query).await?;
        tracing::debug!(
            dimensions = query_vector.len(),
            embedder = self.embedder.name(),
            "query embedded"
        );

        let mut records = self.index.knn_search(&query_vector, top_k).await?;

        // The index collapses on global_no; re-assert the invariant so a
        // misconfigured index cannot leak duplicate dex numbers downstream.
        let mut seen = HashSet::new();
        records.retain(|record| match &record.no {
            Some(no) => seen.insert(no.clone()),
            None => true,
        });
        records.truncate(top_k);

        tracing::info!(
            count = records.len(),
            index = self.index.name(),
            "retrieved records"
        );

        Ok(records)
    }
}
