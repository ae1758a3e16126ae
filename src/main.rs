//! Storefront server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storefront::api::create_catalog_router;
use storefront::catalog::Catalog;
use storefront::config::{AppConfig, LogFormat};
use storefront::store::create_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let store_config = config.store_runtime().context("invalid store configuration")?;
    let store_backend = create_store(store_config)?;
    let store: Arc<dyn storefront::store::CatalogStore> = Arc::from(store_backend);

    let catalog = Arc::new(Catalog::new(store));

    if let Some(seed_path) = &config.seed.path {
        let loaded = catalog
            .load_seed(seed_path)
            .await
            .with_context(|| format!("failed to load seed file {}", seed_path))?;
        tracing::info!(%seed_path, loaded, "Seed file processed");
    }

    let router = create_catalog_router(catalog);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("storefront=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
