//! Joke Gateway Server
//!
//! HTTP gateway in front of the joke, Chuck Norris and insult services,
//! plus a local password generator

use anyhow::{Context, Result};
use joke_gateway::config::{AppConfig, Settings};
use joke_gateway::create_router;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings first: they carry the log level and format
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings);
    info!("{}", joke_gateway::version_info());

    let app_config = AppConfig::load_default()
        .context("Failed to load gateway configuration")?;
    info!("📁 Gateway configuration loaded");

    let addr = app_config.listen_addr();
    let app = create_router(settings, app_config).await?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Joke gateway started on http://{}", addr);
    info!("📝 Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging(settings: &Settings) {
    let log_level = settings.logging.level.clone();

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if settings.logging.format == "json" {
        // JSON format logs (production environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .finish())
    } else {
        // Human readable format (development environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish())
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Logging system initialized");
}
