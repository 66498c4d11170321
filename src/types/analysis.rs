//! Structured analysis produced by the LLM

use serde::{Deserialize, Serialize};

/// Power rating rank derived from the base stat total rubric
/// (600+ -> S, 500-599 -> A, 400-499 -> B, 300-399 -> C, below 300 -> D).
/// The rubric is enforced by the prompt; the LLM self-reports the rank and
/// the service does not re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerRating {
    S,
    A,
    B,
    C,
    D,
}

/// One analysed Pokémon entry from the LLM answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEntry {
    /// National dex number
    pub no: u32,
    /// Pokémon name
    pub name: String,
    /// Relevance to the query, 0-100
    pub relevance_score: u8,
    /// Ordinal power rank
    pub power_rating: PowerRating,
    /// Relevance analysis (bounded at 100 characters by the prompt)
    pub relevance_analysis: String,
    /// Ghost story (bounded at 200 characters by the prompt)
    pub background_story: String,
}

/// Summary block of the LLM answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// The single most relevant Pokémon, if the model named one
    #[serde(default)]
    pub most_relevant_pokemon: Option<MostRelevant>,
}

/// The most relevant Pokémon according to the LLM
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MostRelevant {
    /// Dex number; models emit this as either a number or a string
    #[serde(default)]
    pub no: serde_json::Value,
    #[serde(default)]
    pub name: String,
    /// Why this Pokémon was chosen
    #[serde(default)]
    pub explanation: String,
}

/// Parsed top-level structure of the LLM answer.
///
/// Either key may be absent; downstream treats a missing key as null rather
/// than as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerEnvelope {
    #[serde(default)]
    pub pokemon_entries: Option<Vec<AnalysisEntry>>,
    #[serde(default)]
    pub summary: Option<AnalysisSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_round_trip() {
        let json = serde_json::json!({
            "pokemon_entries": [{
                "no": 25,
                "name": "Pikachu",
                "relevance_score": 95,
                "power_rating": "C",
                "relevance_analysis": "Electric type directly matches the query.",
                "background_story": "At night its cheeks crackle with stolen sparks."
            }],
            "summary": {
                "most_relevant_pokemon": {
                    "no": "25",
                    "name": "Pikachu",
                    "explanation": "Highest relevance score."
                }
            }
        });

        let envelope: AnswerEnvelope = serde_json::from_value(json.clone()).unwrap();
        let entries = envelope.pokemon_entries.as_ref().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].no, 25);
        assert_eq!(entries[0].power_rating, PowerRating::C);

        // No lossy transformation on the way back out
        assert_eq!(serde_json::to_value(&envelope).unwrap(), json);
    }

    #[test]
    fn test_missing_keys_tolerated() {
        let envelope: AnswerEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.pokemon_entries.is_none());
        assert!(envelope.summary.is_none());

        let envelope: AnswerEnvelope =
            serde_json::from_str(r#"{"pokemon_entries": []}"#).unwrap();
        assert_eq!(envelope.pokemon_entries, Some(vec![]));
        assert!(envelope.summary.is_none());
    }
}
