//! Folio portfolio client - Main entry point
//!
//! Restores any persisted session, bootstraps authentication (including
//! the silent-login path), and loads the portfolio data a dashboard
//! front-end would render.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folio_application::{AuthManager, PortfolioService, SessionClient, SessionContext};
use folio_domain::{ClientConfig, TimelineRange};
use folio_infrastructure::{FileSessionStorage, LoggingRedirectHandler, ReqwestTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("FOLIO_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    let mut config = ClientConfig::new(&base_url)?;
    if let Ok(timeout) = std::env::var("FOLIO_TIMEOUT_MS") {
        config = config.with_timeout_ms(timeout.parse()?)?;
    }

    let storage = Arc::new(FileSessionStorage::new()?);
    let context = Arc::new(SessionContext::new(storage));
    context.restore().await?;

    let transport = Arc::new(ReqwestTransport::new(config.base_url.clone())?);
    let client = Arc::new(SessionClient::new(
        transport,
        Arc::clone(&context),
        config,
        Arc::new(LoggingRedirectHandler::new()),
    ));

    let auth = AuthManager::new(Arc::clone(&client));
    let state = auth.bootstrap().await;

    if state.is_authenticated {
        let portfolio = PortfolioService::new(client);

        let overview = portfolio.overview().await?;
        tracing::info!(
            total_value_usd = overview.total_value_usd,
            assets = overview.asset_count,
            "portfolio loaded"
        );

        let series = portfolio.timeline(TimelineRange::Week).await?;
        tracing::info!(points = series.len(), "timeline loaded");
    } else {
        tracing::info!("no active session; sign in to load portfolio data");
    }

    Ok(())
}
