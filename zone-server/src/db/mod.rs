//! Database Module
//!
//! SQLite connection pool, embedded migrations and one query module per
//! table family. Query functions take `&SqlitePool`, or `&mut SqliteConnection`
//! when they run inside a caller-owned transaction.

pub mod access;
pub mod attendees;
pub mod checkins;
pub mod events;
pub mod staff;
pub mod usage;
pub mod zones;

use shared::error::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database with WAL mode and run migrations.
    ///
    /// `":memory:"` opens a single-connection in-memory database.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let in_memory = db_path == IN_MEMORY;
        let url = if in_memory {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{db_path}")
        };

        let mut options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        if !in_memory {
            options = options
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .optimize_on_close(true, None);
        }

        // Each in-memory connection is its own database, so keep exactly one alive.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            path = %db_path,
            busy_timeout_ms = BUSY_TIMEOUT.as_millis() as u64,
            "Database connection established"
        );

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}
