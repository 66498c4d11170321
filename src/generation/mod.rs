//! Prompt construction and structured-answer parsing

pub mod parser;
pub mod prompt;

pub use parser::AnswerParser;
pub use prompt::PromptBuilder;
