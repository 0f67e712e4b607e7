//! nutrition-tracker server entry point.
//!
//! Loads configuration, wires the Nutritionix client into the entry
//! service, and starts the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use nutrition_tracker::api;
use nutrition_tracker::api::openapi::SWAGGER_UI_PATH;
use nutrition_tracker::app_state::AppState;
use nutrition_tracker::config::{Config, LogFormat};
use nutrition_tracker::domain::EntryStore;
use nutrition_tracker::lookup::NutritionixClient;
use nutrition_tracker::service::EntryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    init_tracing(LogFormat::from_env());
    if let Err(err) = dotenv {
        tracing::warn!(error = %err, "no .env file loaded, using process environment");
    }

    // Load configuration; missing credentials are fatal
    let config = Config::from_env()
        .inspect_err(|err| tracing::error!(error = %err, "invalid configuration"))
        .context("invalid configuration")?;
    tracing::info!(
        addr = %config.listen_addr,
        upstream = %config.nutritionix_base_url,
        timeout_secs = config.lookup_timeout.as_secs(),
        "starting nutrition-tracker"
    );

    // Build lookup client and service layer
    let lookup = NutritionixClient::from_config(&config).context("building nutrition client")?;
    let store = Arc::new(EntryStore::new());
    let entry_service = EntryService::new(store, Arc::new(lookup));

    // Build router
    let app = api::build_app(AppState::new(entry_service));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, docs = SWAGGER_UI_PATH, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
