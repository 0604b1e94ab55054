use std::sync::Arc;

use axum::{Extension, Json};

use sentiscope_core::SentimentAnalyzer;

use crate::types::HealthResponse;

/// `GET /health` — liveness check. Never contacts the provider.
pub async fn health(Extension(analyzer): Extension<Arc<SentimentAnalyzer>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: analyzer.provider().to_string(),
    })
}
