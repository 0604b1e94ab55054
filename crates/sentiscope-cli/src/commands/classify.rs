use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use sentiscope_api::error::UPSTREAM_PREFIX;
use sentiscope_core::{ChatCompletionsClient, CoreError, SentimentAnalyzer};

use crate::config::AppConfig;

/// Classify a single comment and print the verdict as JSON on stdout.
pub async fn run(comment: &str, model: Option<&str>, config: &AppConfig) -> anyhow::Result<()> {
    let provider = config.provider_config(model);
    debug!(model = %provider.model, "Classifying one comment");

    let client = ChatCompletionsClient::new(provider)?;
    let analyzer = SentimentAnalyzer::new(Arc::new(client));

    let line = classify_with(&analyzer, comment).await?;
    println!("{line}");
    Ok(())
}

/// Run one classification and encode the verdict as a single JSON line.
///
/// Failures use the same wording as the HTTP API.
pub async fn classify_with(analyzer: &SentimentAnalyzer, comment: &str) -> anyhow::Result<String> {
    let verdict = analyzer.analyze(comment).await.map_err(|e| match e {
        CoreError::EmptyComment => anyhow::anyhow!(e),
        other => anyhow::anyhow!("{UPSTREAM_PREFIX}{other}"),
    })?;

    serde_json::to_string(&verdict).context("Failed to encode verdict")
}
