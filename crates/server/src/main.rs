use anyhow::{Context, Result};
use dotenv::dotenv;
use seaquery_server_fin_api::handler::AppRouter;
use shared::{
    config::{Config, ConnectionManager},
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let _guard = init_logger("server");

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool, &config.jwt_secret);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Server shut down");

    Ok(())
}
