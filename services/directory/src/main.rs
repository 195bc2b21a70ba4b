use std::time::Duration;

use anyhow::Context as _;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait as _;
use tracing::info;

use resto_core::tracing::init_tracing;
use resto_directory::config::DirectoryConfig;
use resto_directory::router::build_router;
use resto_directory::state::AppState;
use resto_directory_migration::Migrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DirectoryConfig::from_env()?;

    let mut options = ConnectOptions::new(&config.database_url);
    options
        .max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let router = build_router(AppState::new(db));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("directory service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
