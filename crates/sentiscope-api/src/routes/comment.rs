use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Extension, Json};
use tracing::{info, instrument, warn};

use sentiscope_core::SentimentAnalyzer;

use crate::{
    error::{ApiError, ApiResult},
    types::{CommentRequest, SentimentResponse},
};

/// `POST /comment`
#[instrument(skip_all)]
pub async fn analyze_comment(
    Extension(analyzer): Extension<Arc<SentimentAnalyzer>>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> ApiResult<Json<SentimentResponse>> {
    let Json(req) = payload?;

    match analyzer.analyze(&req.comment).await {
        Ok(verdict) => {
            info!(sentiment = %verdict.sentiment, rating = verdict.rating, "Comment classified");
            Ok(Json(verdict))
        }
        Err(e) => {
            let err = ApiError::from(e);
            if matches!(err, ApiError::Upstream(_)) {
                warn!(error = %err, "Classification failed");
            }
            Err(err)
        }
    }
}
