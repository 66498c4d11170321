//! Best-effort parsing of LLM-authored JSON
//!
//! LLM output is untrusted text: the contract here is a two-stage
//! trim-then-strict-decode that reports failure as a value instead of an
//! error, so malformed model output can never abort a request.

use serde::de::DeserializeOwned;

use crate::types::analysis::AnswerEnvelope;

/// Parser for the structured analysis answer
pub struct AnswerParser;

impl AnswerParser {
    /// Parse raw LLM text into an [`AnswerEnvelope`].
    ///
    /// Returns `None` when the cleaned text is not valid JSON for the
    /// expected schema. Never panics, for any input.
    pub fn parse(raw: &str) -> Option<AnswerEnvelope> {
        parse_lenient(raw)
    }
}

/// Strip the formatting noise LLMs wrap JSON in, then strictly decode.
///
/// Cleaning removes leading/trailing bracket characters and stray wrapping
/// quotes only; no structural repair is attempted beyond that.
pub fn parse_lenient<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let cleaned = clean_json_text(raw);

    match serde_json::from_str(cleaned) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("failed to parse LLM JSON output: {}", e);
            None
        }
    }
}

fn clean_json_text(input: &str) -> &str {
    input
        .trim()
        .trim_matches(['[', ']'])
        .trim_matches(['\'', '"'])
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::PowerRating;

    #[test]
    fn test_parse_well_formed_answer() {
        let raw = r#"{
            "pokemon_entries": [{
                "no": 94,
                "name": "Gengar",
                "relevance_score": 88,
                "power_rating": "A",
                "relevance_analysis": "A ghost type, directly on topic.",
                "background_story": "It hides in your shadow and steals your warmth."
            }],
            "summary": {
                "most_relevant_pokemon": {
                    "no": "94",
                    "name": "Gengar",
                    "explanation": "Strongest match for the question."
                }
            }
        }"#;

        let envelope = AnswerParser::parse(raw).unwrap();
        let entries = envelope.pokemon_entries.unwrap();
        assert_eq!(entries[0].name, "Gengar");
        assert_eq!(entries[0].power_rating, PowerRating::A);
        assert_eq!(
            envelope.summary.unwrap().most_relevant_pokemon.unwrap().name,
            "Gengar"
        );
    }

    #[test]
    fn test_parse_strips_wrapping_brackets_and_quotes() {
        let raw = r#"[{"pokemon_entries": null, "summary": null}]"#;
        assert!(AnswerParser::parse(raw).is_some());

        let raw = "'{\"pokemon_entries\": null, \"summary\": null}'";
        assert!(AnswerParser::parse(raw).is_some());
    }

    #[test]
    fn test_parse_failure_is_a_value() {
        assert!(AnswerParser::parse("not json").is_none());
        assert!(AnswerParser::parse("").is_none());
        assert!(AnswerParser::parse("{\"pokemon_entries\": [{]}").is_none());
    }

    #[test]
    fn test_parse_tolerates_missing_keys() {
        let envelope = AnswerParser::parse("{}").unwrap();
        assert!(envelope.pokemon_entries.is_none());
        assert!(envelope.summary.is_none());
    }

    #[test]
    fn test_parse_rejects_mistyped_entries() {
        // relevance_score as a string is not structurally repaired
        let raw = r#"{"pokemon_entries": [{"no": 1, "name": "Bulbasaur",
            "relevance_score": "high", "power_rating": "B",
            "relevance_analysis": "", "background_story": ""}]}"#;
        assert!(AnswerParser::parse(raw).is_none());
    }
}
