use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates the process-wide PostgreSQL pool and applies pending migrations.
/// Any failure here must stop the service from accepting traffic.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!(
        "Connecting to PostgreSQL at {}:{}/{}...",
        config.db_server, config.db_port, config.db_name
    );

    let options = PgConnectOptions::new()
        .host(&config.db_server)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("Database connection failed")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Database migration failed")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
