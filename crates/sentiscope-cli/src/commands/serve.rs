use std::sync::Arc;

use tracing::{info, warn};

use sentiscope_api::{serve, ServerConfig};
use sentiscope_core::{ChatCompletionsClient, SentimentAnalyzer};

use crate::config::AppConfig;

/// Start the classification HTTP server.
///
/// The provider credential is read once here. A missing credential is only
/// reported; requests will then fail with the provider's own auth error.
pub async fn run(
    host: Option<&str>,
    port: Option<u16>,
    model: Option<&str>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let provider = config.provider_config(model);
    if provider.api_key.is_none() {
        warn!(
            env = %config.provider.api_key_env,
            "Provider credential not set; classification requests will fail upstream"
        );
    }

    info!(base_url = %provider.base_url, model = %provider.model, "Using chat-completions provider");
    let client = ChatCompletionsClient::new(provider)?;
    let analyzer = Arc::new(SentimentAnalyzer::new(Arc::new(client)));

    let server_config = ServerConfig {
        host: host.unwrap_or(&config.server.host).to_string(),
        port: port.unwrap_or(config.server.port),
    };

    info!(
        host = %server_config.host,
        port = server_config.port,
        "Server starting"
    );

    serve(analyzer, server_config).await?;
    Ok(())
}
