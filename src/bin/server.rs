//! RAG server binary
//!
//! Run with: cargo run --bin pokedex-rag-server

use pokedex_rag::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (POKEDEX_RAG_CONFIG, ES_HOST, GROQ_API_KEY)
    let config = RagConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Elasticsearch: {} (index: {})", config.elasticsearch.base_url, config.elasticsearch.index);
    tracing::info!("  - Embedding model: {} ({} dims)", config.embedding.model, config.embedding.dimensions);
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - top_k: {}", config.retrieval.top_k);

    let server = RagServer::new(config)?;

    // Probe upstream services once at startup; the server still starts if
    // they are down, /ready reports the live state.
    if !server.state().upstreams_healthy().await {
        tracing::warn!("one or more upstream services are unreachable; queries will fail until they recover");
    }

    println!("\nServer starting...");
    println!("  API:    http://{}/api/search", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
