//! Populate the yoga asana reference table.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin populate-yoga
//! ```

use seed_data::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LoaderConfig::from_env();

    // Lazy so that nothing reaches the database before the script is read
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database_url)?;

    match populate(&pool, &config.script_path).await {
        Ok(summary) => {
            tracing::info!("Yoga data successfully populated!");
            tracing::info!("  Statements: {}", summary.statements);
            tracing::info!("  Rows affected: {}", summary.rows_affected);
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), "Error populating yoga data: {e}");
        }
    }

    pool.close().await;

    Ok(())
}
