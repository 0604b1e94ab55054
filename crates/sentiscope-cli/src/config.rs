use std::{path::PathBuf, time::Duration};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use sentiscope_core::ProviderConfig;

/// Prefix of environment overrides, e.g. `SENTISCOPE_SERVER__PORT`.
const ENV_PREFIX: &str = "SENTISCOPE";

/// Full runtime configuration loaded from TOML + env vars.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub provider: ProviderSection,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSection {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the bearer credential.
    pub api_key_env: String,
    /// Whole-request deadline for the provider call; 0 disables it.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            provider: ProviderSection {
                base_url: sentiscope_core::client::DEFAULT_BASE_URL.to_string(),
                model: sentiscope_core::client::DEFAULT_MODEL.to_string(),
                api_key_env: "GROQ_API_KEY".to_string(),
                timeout_secs: sentiscope_core::client::DEFAULT_TIMEOUT.as_secs(),
            },
        }
    }
}

impl AppConfig {
    /// Resolve the provider settings, reading the credential from the
    /// environment. A missing or empty credential is not an error here.
    pub fn provider_config(&self, model_override: Option<&str>) -> ProviderConfig {
        let api_key = std::env::var(&self.provider.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());

        ProviderConfig {
            base_url: self.provider.base_url.clone(),
            model: model_override.unwrap_or(&self.provider.model).to_string(),
            api_key,
            timeout: (self.provider.timeout_secs > 0)
                .then(|| Duration::from_secs(self.provider.timeout_secs)),
        }
    }
}

/// Load configuration from:
/// 1. Built-in defaults
/// 2. `config/default.toml` (if present)
/// 3. A custom config file path (if provided)
/// 4. Environment variables prefixed with `SENTISCOPE_`, sections split by `__`
pub fn load_config(config_file: Option<&PathBuf>) -> Result<AppConfig, ConfigError> {
    load_layered("config/default", config_file, env_overrides())
}

fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_layered(
    default_file: &str,
    config_file: Option<&PathBuf>,
    env: Environment,
) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let mut builder = Config::builder()
        // Layer 1: defaults baked in
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("provider.base_url", defaults.provider.base_url)?
        .set_default("provider.model", defaults.provider.model)?
        .set_default("provider.api_key_env", defaults.provider.api_key_env)?
        .set_default("provider.timeout_secs", defaults.provider.timeout_secs as i64)?
        // Layer 2: project default.toml
        .add_source(File::with_name(default_file).required(false));

    // Layer 3: optional user-supplied config file
    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    // Layer 4: environment variables (SENTISCOPE_SERVER__PORT, SENTISCOPE_PROVIDER__MODEL, ...)
    builder = builder.add_source(env);

    builder.build()?.try_deserialize()
}
