//! # sentiscope-core
//!
//! Sentiment classification of free-text comments through an external
//! chat-completion provider.
//!
//! | Item | Role |
//! |---|---|
//! | [`Classifier`] | Port to the provider: system prompt + text in, raw completion out |
//! | [`ChatCompletionsClient`] | OpenAI-compatible implementation (Groq by default) |
//! | [`SentimentAnalyzer`] | Validates the comment, calls the provider, validates the verdict |
//! | [`SentimentResponse`] | `{ sentiment, rating }` verdict |

pub mod analyzer;
pub mod classifier;
pub mod client;
pub mod error;
pub mod prompt;
pub mod sentiment;
pub mod types;

pub use analyzer::SentimentAnalyzer;
pub use classifier::Classifier;
pub use client::{ChatCompletionsClient, ProviderConfig};
pub use error::{CoreError, CoreResult};
pub use sentiment::{Sentiment, SentimentResponse};
