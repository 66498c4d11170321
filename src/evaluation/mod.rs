//! LLM-based relevance self-evaluation of generated answers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::generation::parser::parse_lenient;
use crate::generation::PromptBuilder;
use crate::providers::{LlmProvider, TokenUsage};

/// Relevance classification label.
///
/// The evaluator only ever produces one of these four values; free-form or
/// unparseable model output maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelevanceLabel {
    #[serde(rename = "irrelevant")]
    Irrelevant,
    #[serde(rename = "partially relevant")]
    PartiallyRelevant,
    #[serde(rename = "relevant")]
    Relevant,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for RelevanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Irrelevant => "irrelevant",
            Self::PartiallyRelevant => "partially relevant",
            Self::Relevant => "relevant",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Relevance verdict as emitted by the evaluation LLM call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceVerdict {
    /// Classification label
    #[serde(rename = "Relevance")]
    pub relevance: RelevanceLabel,
    /// Short explanation of the classification
    #[serde(default = "missing_explanation")]
    pub relevance_explanation: String,
}

fn missing_explanation() -> String {
    "Failed to parse evaluation".to_string()
}

impl RelevanceVerdict {
    /// Sentinel verdict used when the evaluation output cannot be parsed
    pub fn unknown() -> Self {
        Self {
            relevance: RelevanceLabel::Unknown,
            relevance_explanation: missing_explanation(),
        }
    }
}

/// Secondary LLM pass classifying how relevant the generated answer is to
/// the original question.
pub struct RelevanceEvaluator {
    llm: Arc<dyn LlmProvider>,
}

impl RelevanceEvaluator {
    /// Create a new evaluator on top of an LLM provider
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Evaluate the relevance of `answer` to `question`.
    ///
    /// Issues an independent completion call with its own prompt. A failed
    /// LLM call is an error; a completion that cannot be parsed degrades to
    /// the `unknown` sentinel verdict instead.
    pub async fn evaluate(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<(RelevanceVerdict, TokenUsage)> {
        let prompt = PromptBuilder::build_evaluation_prompt(question, answer);
        let completion = self.llm.complete(&prompt).await?;

        let verdict = parse_lenient::<RelevanceVerdict>(&completion.text).unwrap_or_else(|| {
            tracing::warn!("evaluation output was not parseable, using unknown verdict");
            RelevanceVerdict::unknown()
        });

        tracing::debug!(relevance = %verdict.relevance, "answer evaluated");

        Ok((verdict, completion.usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::providers::Completion;
    use async_trait::async_trait;

    struct FakeLlm {
        reply: String,
    }

    #[async_trait]
    impl LlmProvider for FakeLlm {
        async fn complete(&self, _prompt: &str) -> Result<Completion> {
            Ok(Completion {
                text: self.reply.clone(),
                usage: TokenUsage {
                    prompt_tokens: 40,
                    completion_tokens: 10,
                    total_tokens: 50,
                },
            })
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "fake-llm"
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    struct DownLlm;

    #[async_trait]
    impl LlmProvider for DownLlm {
        async fn complete(&self, _prompt: &str) -> Result<Completion> {
            Err(Error::Generation("HTTP 503".to_string()))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(false)
        }

        fn name(&self) -> &str {
            "down-llm"
        }

        fn model(&self) -> &str {
            "down-model"
        }
    }

    #[tokio::test]
    async fn test_evaluate_parses_wrapped_verdict() {
        // Bracket- and quote-wrapped output still parses
        let evaluator = RelevanceEvaluator::new(Arc::new(FakeLlm {
            reply: r#"[{"Relevance": "relevant", "relevance_explanation": "ok"}]"#.to_string(),
        }));

        let (verdict, usage) = evaluator.evaluate("electric type", "answer").await.unwrap();
        assert_eq!(verdict.relevance, RelevanceLabel::Relevant);
        assert_eq!(verdict.relevance_explanation, "ok");
        assert_eq!(usage.total_tokens, 50);
    }

    #[tokio::test]
    async fn test_evaluate_unparseable_yields_sentinel() {
        let evaluator = RelevanceEvaluator::new(Arc::new(FakeLlm {
            reply: "the answer looks fine to me".to_string(),
        }));

        let (verdict, _) = evaluator.evaluate("q", "a").await.unwrap();
        assert_eq!(verdict.relevance, RelevanceLabel::Unknown);
        assert_eq!(verdict.relevance_explanation, "Failed to parse evaluation");
    }

    #[tokio::test]
    async fn test_evaluate_out_of_set_label_yields_sentinel() {
        let evaluator = RelevanceEvaluator::new(Arc::new(FakeLlm {
            reply: r#"{"Relevance": "somewhat ok", "relevance_explanation": "x"}"#.to_string(),
        }));

        let (verdict, _) = evaluator.evaluate("q", "a").await.unwrap();
        assert_eq!(verdict.relevance, RelevanceLabel::Unknown);
    }

    #[tokio::test]
    async fn test_evaluate_llm_failure_is_fatal() {
        let evaluator = RelevanceEvaluator::new(Arc::new(DownLlm));
        assert!(evaluator.evaluate("q", "a").await.is_err());
    }

    #[test]
    fn test_label_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(RelevanceLabel::PartiallyRelevant).unwrap(),
            serde_json::json!("partially relevant")
        );
    }
}
