use sqlx::PgPool;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wellness::{MIGRATOR, config::ServerConfig, run_server};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = ServerConfig::from_env();

    tracing::info!("Connecting to database at {}", config.database_url);

    let pool = PgPool::connect(&config.database_url).await?;

    MIGRATOR.run(&pool).await?;

    tracing::info!(
        fallback_on_error = config.stats.fallback_on_error,
        doctor_source = ?config.stats.doctor_source,
        "Stats endpoint configured"
    );

    run_server(pool, config.stats, config.port).await
}
