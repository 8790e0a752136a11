use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

const MEMORY_DB_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Pool settings for a SeaORM connection.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Settings for a private in-memory SQLite database.
    pub fn sqlite_memory() -> Self {
        Self::from(&configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() })
    }

    fn is_sqlite_memory(&self) -> bool {
        let url = self.url.to_ascii_lowercase();
        url.starts_with("sqlite:") && url.contains(":memory:")
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    // Every in-memory SQLite connection is its own database; pin the pool to one.
    let (min, max) = if cfg.is_sqlite_memory() { (1, 1) } else { (cfg.min_connections, cfg.max_connections) };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_sqlite_memory() {
        // Closing the last connection drops the database.
        opts.idle_timeout(MEMORY_DB_LIFETIME).max_lifetime(MEMORY_DB_LIFETIME);
    } else {
        opts.idle_timeout(cfg.idle_timeout).max_lifetime(cfg.max_lifetime);
    }
    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = max, "database connected");
    Ok(db)
}
