use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the application database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Log every SQL statement through `tracing`.
    pub sql_logging: bool,
}

impl DatabaseConfig {
    /// A private in-memory SQLite database. Each call yields a fresh, empty store.
    ///
    /// The pool is pinned to a single connection because every SQLite
    /// in-memory connection owns its own database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            sql_logging: false,
        }
    }
}

/// Connection pool shared by every repository.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection pool...");

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(config.sql_logging);
        if config.max_connections > config.min_connections {
            opts.idle_timeout(Duration::from_secs(300));
        }

        let main = Database::connect(opts).await?;
        tracing::info!(
            backend = ?main.get_database_backend(),
            pool = config.max_connections,
            "Database connected"
        );

        Ok(Self { main })
    }

    /// Round-trip to the database; used by the health probe.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }
}
