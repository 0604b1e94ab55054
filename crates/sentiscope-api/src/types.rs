use serde::{Deserialize, Serialize};

pub use sentiscope_core::{Sentiment, SentimentResponse};

// ─── Request types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: String,
}
