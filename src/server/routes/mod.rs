//! API routes for the RAG server

pub mod query;

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(query::search))
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "pokedex-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Pokédex RAG with structured LLM analysis and relevance self-evaluation",
        "endpoints": {
            "POST /api/search": "Run a RAG query over the Pokédex index",
            "GET /api/info": "This document"
        }
    }))
}
