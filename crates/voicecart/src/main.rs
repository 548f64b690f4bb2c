//! VoiceCart backend server
//!
//! Parses spoken-transcript commands, filters the mock product catalog, and
//! proxies recipe/suggestion prompts to the Gemini API.

mod config;

use anyhow::{anyhow, Result};
use clap::Parser;
use config::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use voicecart_api::{ApiConfig, ApiServer};
use voicecart_core::generator::GeminiProvider;
use voicecart_core::{Catalog, ContentGenerator};

#[derive(Debug, Parser)]
#[command(name = "voicecart", version, about = "Voice-driven shopping list assistant backend")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let generator = build_generator(&config)?;
    let catalog = Catalog::fixture();
    tracing::info!(products = catalog.len(), "loaded product catalog");

    let api_config = ApiConfig::new()
        .with_host(config.server.host)
        .with_port(config.server.port)
        .with_cors(config.server.enable_cors);

    let server = ApiServer::new(api_config, generator, catalog);
    server.run_with_shutdown(shutdown_signal()).await
}

fn build_generator(config: &AppConfig) -> Result<Arc<dyn ContentGenerator>> {
    let api_key = config
        .generator
        .api_key
        .as_deref()
        .ok_or_else(|| anyhow!("No Gemini API key configured; set GEMINI_API_KEY"))?;

    let mut provider =
        GeminiProvider::with_api_key(api_key).with_model(config.generator.model.clone());
    if let Some(base_url) = &config.generator.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    tracing::info!(model = %config.generator.model, "configured content generator");

    Ok(Arc::new(provider))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
