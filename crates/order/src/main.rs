use anyhow::{Context, Result};
use order::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::{config::ConnectionManager, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("order-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool = ConnectionManager::new_pool(&config.database_url, &config.pool)
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool.clone());

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("HTTP server failed")?;

    info!("🛑 Closing database pool...");
    db_pool.close().await;

    info!("✅ Order service shutdown complete.");

    Ok(())
}
