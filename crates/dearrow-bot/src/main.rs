use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod adapters;
mod config;

use adapters::HttpBrandingService;
use config::BotConfig;
use dearrow::EmbedReplacer;
use dearrow_integration_discord::DiscordBot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "🏹 DeArrow bot starting..."
    );
    tracing::info!(
        embed_scan = %config.embed_scan,
        timeout_secs = config.request_timeout.as_secs(),
        "Replacement policy configured"
    );

    let branding = HttpBrandingService::new(config.endpoints.clone(), config.request_timeout)
        .context("Failed to initialize branding client")?;

    let replacer = Arc::new(EmbedReplacer::with_config(
        Arc::new(branding),
        config.endpoints.clone(),
        config.replacer_config(),
    ));

    let mut bot = DiscordBot::new(config.discord_config(), replacer)
        .await
        .context("Failed to build Discord client")?;

    let shard_manager = bot.shard_manager();
    tokio::spawn(async move {
        wait_for_shutdown().await;
        tracing::info!("🛑 Shutdown signal received, closing gateway");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("✅ DeArrow bot is now running");
    bot.start()
        .await
        .context("Error while connecting to the gateway")?;

    tracing::info!("DeArrow bot stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
