//! Elasticsearch KNN search client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::ElasticsearchConfig;
use crate::error::{Error, Result};
use crate::types::record::{PokemonRecord, StatBlock};

/// Trait for KNN search over the indexed Pokédex
///
/// Implementations:
/// - `ElasticsearchClient`: dense-vector KNN with `global_no` collapsing
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Search for the `top_k` nearest records to the query vector, ordered by
    /// descending similarity as reported by the index.
    async fn knn_search(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<PokemonRecord>>;

    /// Check if the index is healthy and reachable
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

/// Elasticsearch client issuing KNN queries over the HTTP API
pub struct ElasticsearchClient {
    client: Client,
    config: ElasticsearchConfig,
}

impl ElasticsearchClient {
    /// Create a new Elasticsearch client
    pub fn new(config: &ElasticsearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the KNN search request body.
    ///
    /// Requests an oversampled candidate pool for recall, collapses on
    /// `global_no` so at most one hit per dex number survives, and excludes
    /// the stored vector from the returned source.
    pub fn build_search_body(&self, query_vector: &[f32], top_k: usize) -> Value {
        json!({
            "knn": {
                "field": "combined_text_vector",
                "query_vector": query_vector,
                "k": top_k,
                "num_candidates": self.config.num_candidates.max(top_k)
            },
            "collapse": {
                "field": "global_no"
            },
            "_source": {
                "excludes": ["combined_text_vector"]
            }
        })
    }

    /// Extract records from an Elasticsearch search response, preserving the
    /// engine's hit order.
    pub fn parse_hits(body: &Value) -> Vec<PokemonRecord> {
        body.pointer("/hits/hits")
            .and_then(Value::as_array)
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("_source"))
                    .map(Self::record_from_source)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Map one hit source to the canonical record shape, null-filling any
    /// field the index did not supply.
    fn record_from_source(source: &Value) -> PokemonRecord {
        PokemonRecord {
            name_en: string_field(source, "name_english"),
            name_cn: string_field(source, "name_chinese"),
            name_ja: string_field(source, "name_japanese"),
            types: string_list(source, "types"),
            abilities: string_list(source, "abilities"),
            no: source
                .get("global_no")
                .and_then(Value::as_str)
                .map(str::to_string),
            description: source
                .get("description_scarlet")
                .and_then(Value::as_str)
                .map(str::to_string),
            description_violet: source
                .get("description_violet")
                .and_then(Value::as_str)
                .map(str::to_string),
            form: string_field(source, "form"),
            stats: StatBlock {
                hp: int_field(source, "stats_hp"),
                attack: int_field(source, "stats_attack"),
                defense: int_field(source, "stats_defense"),
                special_attack: int_field(source, "stats_special_attack"),
                special_defense: int_field(source, "stats_special_defense"),
                speed: int_field(source, "stats_speed"),
            },
        }
    }
}

fn string_field(source: &Value, key: &str) -> String {
    source
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(source: &Value, key: &str) -> Vec<String> {
    source
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn int_field(source: &Value, key: &str) -> Option<i64> {
    source.get(key).and_then(Value::as_i64)
}

#[async_trait]
impl SearchIndexProvider for ElasticsearchClient {
    async fn knn_search(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<PokemonRecord>> {
        let url = format!("{}/{}/_search", self.config.base_url, self.config.index);
        let body = self.build_search_body(query_vector, top_k);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Retrieval(format!("search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Retrieval(format!(
                "search failed: HTTP {} - {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Retrieval(format!("failed to parse search response: {}", e)))?;

        Ok(Self::parse_hits(&body))
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/_cluster/health", self.config.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "elasticsearch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ElasticsearchConfig;

    fn client() -> ElasticsearchClient {
        ElasticsearchClient::new(&ElasticsearchConfig::default()).unwrap()
    }

    #[test]
    fn test_search_body_shape() {
        let body = client().build_search_body(&[0.1, 0.2, 0.3], 5);

        assert_eq!(body["knn"]["field"], "combined_text_vector");
        assert_eq!(body["knn"]["k"], 5);
        assert_eq!(body["knn"]["num_candidates"], 100);
        assert_eq!(body["collapse"]["field"], "global_no");
        assert_eq!(body["_source"]["excludes"][0], "combined_text_vector");
    }

    #[test]
    fn test_candidate_pool_never_below_top_k() {
        let body = client().build_search_body(&[0.0; 4], 500);
        assert_eq!(body["knn"]["num_candidates"], 500);
    }

    #[test]
    fn test_parse_hits_maps_fields() {
        let body = serde_json::json!({
            "hits": {
                "hits": [{
                    "_score": 0.92,
                    "_source": {
                        "name_english": "Pikachu",
                        "name_chinese": "皮卡丘",
                        "name_japanese": "ピカチュウ",
                        "types": ["Electric"],
                        "abilities": ["Static", "Lightning Rod"],
                        "global_no": "25",
                        "form": "",
                        "description_scarlet": "Stores electricity in its cheeks.",
                        "description_violet": "Raises its tail to sense its surroundings.",
                        "stats_hp": 35,
                        "stats_attack": 55,
                        "stats_defense": 40,
                        "stats_special_attack": 50,
                        "stats_special_defense": 50,
                        "stats_speed": 90
                    }
                }]
            }
        });

        let records = ElasticsearchClient::parse_hits(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name_en, "Pikachu");
        assert_eq!(records[0].types, vec!["Electric"]);
        assert_eq!(records[0].no.as_deref(), Some("25"));
        assert_eq!(records[0].stats.speed, Some(90));
    }

    #[test]
    fn test_parse_hits_null_fills_missing_fields() {
        let body = serde_json::json!({
            "hits": {
                "hits": [{
                    "_source": {
                        "name_english": "Mew",
                        "stats_hp": null
                    }
                }]
            }
        });

        let records = ElasticsearchClient::parse_hits(&body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name_en, "Mew");
        assert!(records[0].types.is_empty());
        assert!(records[0].no.is_none());
        assert!(records[0].stats.hp.is_none());
        assert_eq!(records[0].form, "");
    }

    #[test]
    fn test_parse_hits_empty_response() {
        assert!(ElasticsearchClient::parse_hits(&serde_json::json!({})).is_empty());
    }
}
