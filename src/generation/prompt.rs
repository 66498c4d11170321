//! Prompt templates for analysis and relevance evaluation

use crate::types::record::PokemonRecord;

/// Prompt builder for RAG queries.
///
/// All builders are pure: identical inputs always produce identical prompts.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render retrieved records into the CONTEXT section, one fixed-field
    /// block per record, blank-line separated.
    pub fn build_context(records: &[PokemonRecord]) -> String {
        records
            .iter()
            .map(Self::format_record)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_record(record: &PokemonRecord) -> String {
        format!(
            "nameEn: {}\n\
             nameCn: {}\n\
             nameJa: {}\n\
             types: {}\n\
             abilities: {}\n\
             no: {}\n\
             form: {}\n\
             description: {}\n\
             descriptionViolet: {}\n\
             hp: {}\n\
             attack: {}\n\
             defense: {}\n\
             specialAttack: {}\n\
             specialDefense: {}\n\
             speed: {}",
            record.name_en,
            record.name_cn,
            record.name_ja,
            record.types.join(", "),
            record.abilities.join(", "),
            record.no.as_deref().unwrap_or("null"),
            record.form,
            record.description.as_deref().unwrap_or("null"),
            record.description_violet.as_deref().unwrap_or("null"),
            format_stat(record.stats.hp),
            format_stat(record.stats.attack),
            format_stat(record.stats.defense),
            format_stat(record.stats.special_attack),
            format_stat(record.stats.special_defense),
            format_stat(record.stats.speed),
        )
    }

    /// Build the primary analysis prompt: mandates JSON-only output in the
    /// nested schema, bounded free-text lengths, and the stat-total rank
    /// rubric.
    pub fn build_analysis_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a Pokémon master analyst and a novelist specialising in Pokémon ghost stories.
For each Pokémon in CONTEXT, analyse and rate its relation to QUESTION, then answer in the format below.

Rules:
- Output valid JSON only
- Do not include backslashes, escape sequences or other special characters
- Use underscores (_) bare, never in the form \_
- Do not add surrounding text, code fences or stray newlines

Output format:

{{
    "pokemon_entries": [
        {{
            "no": <national dex number, as a number>,
            "name": "<Pokémon name>",
            "relevance_score": <number from 0 to 100>,
            "power_rating": "<one of S/A/B/C/D>",
            "relevance_analysis": "<relevance analysis in at most 100 characters>",
            "background_story": "<ghost story in at most 200 characters>"
        }}
    ],
    "summary": {{
        "most_relevant_pokemon": {{
            "no": "<dex number of the most relevant Pokémon>",
            "name": "<Pokémon name>",
            "explanation": "<reason for the choice in at most 100 characters>"
        }}
    }}
}}

Power rating criteria:
S: base stat total of 600 or more, or an exceptionally strong ability
A: base stat total of 500-599, or an excellent ability
B: base stat total of 400-499 with an ordinary ability
C: base stat total of 300-399
D: base stat total below 300

Analysis notes:
- Every ghost story must contain something eerie or frightening
- The relevance analysis must rest on objective evidence
- Scores must be derived from concrete factors

QUESTION: {question}
CONTEXT: {context}"#,
            question = question,
            context = context
        )
    }

    /// Build the relevance-evaluation prompt for the secondary LLM call.
    ///
    /// Fully independent of the analysis prompt; classifies into exactly one
    /// of three labels.
    pub fn build_evaluation_prompt(question: &str, answer: &str) -> String {
        format!(
            r#"You are an expert evaluator for a RAG system.
Your task is to analyse the relevance of the generated answer to the given question.
Based on the relevance of the generated answer, classify it as "irrelevant", "partially relevant" or "relevant".

Here is the data for evaluation:

Question: {question}
Generated answer: {answer}

Analyse the content and context of the generated answer in relation to the question,
and provide the evaluation as parseable JSON without code blocks and without any additional explanation:

{{
    "Relevance": "irrelevant" | "partially relevant" | "relevant",
    "relevance_explanation": "[provide a brief explanation of the evaluation]"
}}"#,
            question = question,
            answer = answer
        )
    }
}

fn format_stat(value: Option<i64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::StatBlock;

    fn pikachu() -> PokemonRecord {
        PokemonRecord {
            name_en: "Pikachu".to_string(),
            name_cn: "皮卡丘".to_string(),
            name_ja: "ピカチュウ".to_string(),
            types: vec!["Electric".to_string()],
            abilities: vec!["Static".to_string(), "Lightning Rod".to_string()],
            no: Some("25".to_string()),
            description: Some("Stores electricity in its cheeks.".to_string()),
            description_violet: None,
            form: String::new(),
            stats: StatBlock {
                hp: Some(35),
                attack: Some(55),
                defense: Some(40),
                special_attack: Some(50),
                special_defense: Some(50),
                speed: Some(90),
            },
        }
    }

    #[test]
    fn test_context_renders_record_fields() {
        let context = PromptBuilder::build_context(&[pikachu()]);

        assert!(context.contains("nameEn: Pikachu"));
        assert!(context.contains("types: Electric"));
        assert!(context.contains("abilities: Static, Lightning Rod"));
        assert!(context.contains("no: 25"));
        assert!(context.contains("speed: 90"));
        assert!(context.contains("descriptionViolet: null"));
    }

    #[test]
    fn test_context_blocks_blank_line_separated() {
        let mut raichu = pikachu();
        raichu.name_en = "Raichu".to_string();
        raichu.no = Some("26".to_string());

        let context = PromptBuilder::build_context(&[pikachu(), raichu]);
        let blocks: Vec<&str> = context.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].starts_with("nameEn: Raichu"));
    }

    #[test]
    fn test_analysis_prompt_is_deterministic() {
        let context = PromptBuilder::build_context(&[pikachu()]);
        let a = PromptBuilder::build_analysis_prompt("electric type", &context);
        let b = PromptBuilder::build_analysis_prompt("electric type", &context);
        assert_eq!(a, b);
    }

    #[test]
    fn test_analysis_prompt_contains_query_and_records() {
        let context = PromptBuilder::build_context(&[pikachu()]);
        let prompt = PromptBuilder::build_analysis_prompt("electric type", &context);

        assert!(prompt.contains("Pikachu"));
        assert!(prompt.contains("QUESTION: electric type"));
        assert!(prompt.contains("pokemon_entries"));
        assert!(prompt.contains("most_relevant_pokemon"));
        assert!(prompt.contains("base stat total of 600 or more"));
    }

    #[test]
    fn test_evaluation_prompt_contains_labels() {
        let prompt = PromptBuilder::build_evaluation_prompt("electric type", "some answer");

        assert!(prompt.contains("Question: electric type"));
        assert!(prompt.contains("Generated answer: some answer"));
        assert!(prompt.contains("\"irrelevant\" | \"partially relevant\" | \"relevant\""));
    }
}
