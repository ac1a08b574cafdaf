//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::config::Config;
use crate::db::DbService;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Bearer token verification
    pub jwt: Arc<JwtService>,
}

impl AppState {
    /// Open the database (running migrations) and build the token service
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let db = DbService::new(&config.database_url).await?;
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiry_hours);
        Ok(Self::with_parts(db.pool, jwt))
    }

    pub fn with_parts(pool: SqlitePool, jwt: JwtService) -> Self {
        Self {
            pool,
            jwt: Arc::new(jwt),
        }
    }
}
