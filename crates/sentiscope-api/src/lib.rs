//! # sentiscope-api
//!
//! HTTP front end for sentiment classification.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | `POST` | `/comment` | Classify `{"comment": "..."}` into `{"sentiment", "rating"}` |
//! | `GET` | `/health` | Liveness check |
//!
//! Errors are returned as `{"detail": "..."}`: 400 for a blank comment, 422
//! for an undecodable body, 500 (prefixed `AI API error: `) for any provider
//! or verdict failure.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod types;


pub use error::{ApiError, ApiResult};
pub use server::{build_router, serve, ServerConfig};
