//! Vector retrieval against the Pokédex index

pub mod elastic;
pub mod search;

pub use elastic::{ElasticsearchClient, SearchIndexProvider};
pub use search::Retriever;
