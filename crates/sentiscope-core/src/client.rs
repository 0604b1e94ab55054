//! OpenAI-compatible chat-completions adapter.
//!
//! Sends a single non-streaming request per call, without retries. An
//! optional whole-request timeout surfaces as [`CoreError::Transport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::{
    classifier::Classifier,
    error::{CoreError, CoreResult},
    prompt::build_messages,
    types::{ChatCompletionRequest, ChatCompletionResponse, ResponseFormat},
};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for [`ChatCompletionsClient`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    /// Bearer credential. `None` sends the request unauthenticated and lets
    /// the provider reject it.
    pub api_key: Option<String>,
    /// Whole-request deadline. `None` leaves reqwest's default (no deadline).
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

pub struct ChatCompletionsClient {
    http: HttpClient,
    config: ProviderConfig,
}

impl ChatCompletionsClient {
    pub fn new(config: ProviderConfig) -> CoreResult<Self> {
        let mut builder = HttpClient::builder()
            .user_agent(concat!("sentiscope/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Deterministic, JSON-formatted request for one comment.
    pub fn build_request(&self, system: &str, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(system, text),
            response_format: ResponseFormat::json_object(),
            temperature: 0.0,
        }
    }
}

/// Take the first choice's message content.
pub fn first_choice_content(resp: ChatCompletionResponse) -> CoreResult<String> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(CoreError::EmptyCompletion)
}

#[async_trait]
impl Classifier for ChatCompletionsClient {
    fn name(&self) -> &str {
        "chat-completions"
    }

    async fn classify(&self, system: &str, text: &str) -> CoreResult<String> {
        let body = self.build_request(system, text);
        let url = self.endpoint();
        debug!(url = %url, model = %body.model, "Sending chat completion request");

        let mut req = self.http.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::Http { status: status.as_u16(), body });
        }

        let parsed: ChatCompletionResponse = resp.json().await?;
        first_choice_content(parsed)
    }
}
