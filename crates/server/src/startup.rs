use axum::Router;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tokio::runtime::{Builder, Runtime};
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use models::db::{connect_with_config, DatabaseConfig};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect with the configured pool settings and bring the schema up to date.
pub async fn prepare_database(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrations applied");
    Ok(db)
}

/// Router wired to `db` with the default CORS policy.
pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState { db }, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Multi-threaded runtime with IO and timers; `None` keeps tokio's per-core default.
pub fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = worker_threads {
        builder.worker_threads(n);
    }
    builder.build()
}

/// Migrate, then serve HTTP with a validated configuration until Ctrl+C.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let db = prepare_database(&cfg).await?;
    let app = app(db);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_honours_worker_threads() -> std::io::Result<()> {
        let rt = build_runtime(Some(2))?;
        assert_eq!(rt.metrics().num_workers(), 2);
        assert_eq!(rt.block_on(async { tokio::task::spawn(async { 7 }).await.unwrap_or(0) }), 7);

        let default_rt = build_runtime(None)?;
        assert!(default_rt.metrics().num_workers() >= 1);
        Ok(())
    }
}
