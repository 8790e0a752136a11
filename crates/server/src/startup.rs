use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Prefer the TOML file at `CONFIG_PATH`; fall back to environment variables
/// only when that file does not exist.
pub fn load_config() -> Result<AppConfig, StartupError> {
    load_config_from(&configs::config_path(), |key| std::env::var(key).ok())
}

fn load_config_from(path: &str, var: impl Fn(&str) -> Option<String>) -> Result<AppConfig, StartupError> {
    match configs::load_if_present(path) {
        Ok(Some(cfg)) => Ok(cfg),
        Ok(None) => AppConfig::from_vars(var)
            .map_err(|e| StartupError::InvalidConfig(format!("{path} not found; environment: {e}"))),
        Err(e) => Err(StartupError::InvalidConfig(e.to_string())),
    }
}

/// `log.format` is validated at load time.
pub fn log_format(cfg: &AppConfig) -> LogFormat {
    cfg.log.format.parse().unwrap_or_default()
}

/// Open the pool and bring the schema up to date when configured to.
pub async fn connect_database(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = connect_with_config(&DatabaseConfig::from(cfg))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!("migrations applied");
    } else {
        warn!("database.run_migrations is false; assuming schema is current");
    }
    Ok(db)
}

/// Router over a ready database connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), build_cors())
}

/// Public entry: load configuration, initialize logging and serve.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    init_logging(log_format(&cfg));
    run_with_config(cfg).await
}

/// Serve with an already loaded configuration; logging must be initialized by the caller.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&cfg.database).await?;
    let app = build_app(db);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting admin console server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
