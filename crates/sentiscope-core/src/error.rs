use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("provider returned no completion content")]
    EmptyCompletion,

    #[error("schema violation: {0}")]
    SchemaViolation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
