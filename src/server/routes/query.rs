//! Query endpoint running the RAG pipeline

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::response::{QueryRequest, RagResponse};

/// POST /api/search - run one RAG query
///
/// Terminal pipeline failures surface as an `{"error": ...}` payload with a
/// non-2xx status; a degraded-but-successful run (unparseable answer, unknown
/// relevance) is still a 200.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<RagResponse>> {
    let response = state
        .pipeline()
        .run_with_top_k(&request.query, request.top_k)
        .await?;

    Ok(Json(response))
}
