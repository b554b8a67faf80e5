use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use elearn_backend::config::AppConfig;
use elearn_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_level(true).with_target(false))
        .init();

    info!(
        data_dir = %config.server.data_dir.display(),
        upload_dir = %config.server.upload_dir.display(),
        object_storage = config.object_storage.s3_settings().is_some(),
        "Starting e-learning backend"
    );

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config)?;

    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    info!("HTTP server listening on {}", config.server.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
