use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use config::load_config;

/// sentiscope — comment sentiment classification over an LLM provider
#[derive(Debug, Parser)]
#[command(name = "sentiscope", version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Path to a custom configuration file (TOML).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log format: "pretty" (default) or "json".
    #[arg(long, global = true, default_value = "pretty", value_name = "FORMAT")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server exposing `POST /comment`.
    Serve {
        /// Address to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on.
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Provider model id (overrides `provider.model`).
        #[arg(long, short = 'm')]
        model: Option<String>,
    },

    /// Classify one comment and print `{"sentiment", "rating"}` to stdout.
    Classify {
        /// Comment text to classify.
        #[arg(long, short = 'c')]
        comment: String,

        /// Provider model id (overrides `provider.model`).
        #[arg(long, short = 'm')]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up GROQ_API_KEY and SENTISCOPE_* from a local .env, if any.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_format);

    let cfg = load_config(cli.config.as_ref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { host, port, model } => {
            commands::serve::run(host.as_deref(), port, model.as_deref(), &cfg).await?;
        }
        Commands::Classify { comment, model } => {
            commands::classify::run(&comment, model.as_deref(), &cfg).await?;
        }
    }

    Ok(())
}

fn init_tracing(log_format: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if log_format == "json" {
        registry
            .with(fmt::layer().json())
            .init();
    } else {
        registry
            .with(fmt::layer().pretty())
            .init();
    }
}
