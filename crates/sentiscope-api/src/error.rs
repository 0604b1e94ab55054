use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use sentiscope_core::CoreError;

/// Prefix on every provider-side failure reported to clients.
pub const UPSTREAM_PREFIX: &str = "AI API error: ";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("AI API error: {0}")]
    Upstream(CoreError),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyComment => ApiError::BadRequest(err.to_string()),
            other => ApiError::Upstream(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_comment_yields_400_with_fixed_detail() {
        let resp = ApiError::from(CoreError::EmptyComment).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let v = body_json(resp).await;
        assert_eq!(v, json!({ "detail": "Comment cannot be empty" }));
    }

    #[tokio::test]
    async fn test_upstream_yields_500_with_prefix() {
        let err = ApiError::from(CoreError::Http { status: 401, body: "Invalid API Key".to_string() });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let v = body_json(resp).await;
        assert_eq!(v["detail"], "AI API error: HTTP 401: Invalid API Key");
    }

    #[tokio::test]
    async fn test_schema_violation_is_upstream() {
        let err = ApiError::from(CoreError::SchemaViolation("rating 9 is outside 1..=5".to_string()));
        assert!(matches!(err, ApiError::Upstream(_)));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let v = body_json(resp).await;
        assert_eq!(v["detail"], "AI API error: schema violation: rating 9 is outside 1..=5");
    }

    #[tokio::test]
    async fn test_unprocessable_yields_422() {
        let resp = ApiError::Unprocessable("missing field `comment`".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let v = body_json(resp).await;
        assert_eq!(v["detail"], "missing field `comment`");
    }

    #[tokio::test]
    async fn test_error_body_has_only_detail() {
        let resp = ApiError::BadRequest("x".to_string()).into_response();
        let v = body_json(resp).await;
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj["detail"].is_string());
    }
}
