//! Core types for the RAG service

pub mod analysis;
pub mod record;
pub mod response;

pub use analysis::{AnalysisEntry, AnalysisSummary, AnswerEnvelope, MostRelevant, PowerRating};
pub use record::{PokemonRecord, StatBlock};
pub use response::{QueryRequest, RagResponse};
