//! MediCare Portal Server

use anyhow::Context;
use clap::Parser;
use medicare_portal::config::{Cli, PortalConfig};
use medicare_portal::{build_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = PortalConfig::load(cli.config.as_deref())?.with_overrides(&cli);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(&config)?;
    let app = build_router(state);

    tracing::info!(
        delay_ms = config.submission_delay_ms,
        simulate_failure = config.simulate_failure,
        "MediCare portal listening on {}",
        config.bind
    );

    let listener = tokio::net::TcpListener::bind(config.bind.as_str())
        .await
        .with_context(|| format!("cannot bind {}", config.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}
