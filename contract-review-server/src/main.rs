//! Contract Review Server
//!
//! Accepts trade-contract text on `POST /` (or any path), forwards it to
//! Qwen through DashScope with a lawyer prompt in the requested language,
//! and relays the analysis back as JSON.
//!
//! Access via: http://localhost:3000

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod router;
mod server_utils;

#[cfg(test)]
mod test_helpers;

use cli::Cli;
use contract_review_core::{AnalysisState, InferenceClient, ProviderConfig, RuntimeEnvironment};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    info!("🚀 Contract Review Server starting on port {}...", cli.port);

    let provider_config =
        ProviderConfig::new(cli.api_key.as_deref(), &cli.endpoint, cli.timeout_ms)
            .map_err(|e| anyhow::anyhow!("Invalid provider configuration: {}", e))?;
    info!(
        "🔑 Provider endpoint {} (timeout {}ms)",
        provider_config.endpoint(),
        provider_config.timeout_ms()
    );

    let environment = RuntimeEnvironment::from(cli.environment);
    if environment.is_development() {
        info!("🧪 Development mode: error details are included in responses");
    }

    let provider_timeout_ms = provider_config.timeout_ms();
    let client = InferenceClient::new(provider_config)?;
    let state = AnalysisState::new(client, environment);
    let app = router::build_router(state);

    let listener = server_utils::create_listener(&cli.bind, cli.port).await?;
    info!("🌐 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(server_utils::shutdown_signal(provider_timeout_ms))
        .await?;

    info!("👋 Server stopped");
    Ok(())
}
