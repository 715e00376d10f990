//! homefinder-db: data-access layer for the homefinder listings app
//!
//! Thin, typed wrappers over parameterized PostgreSQL statements for users,
//! admins, properties, favourites and messages. Each call acquires a
//! connection from one shared pool, runs a single statement, and returns
//! plain records.
//!
//! ```ignore
//! let db = Database::connect(&DatabaseConfig::from_env()?).await?;
//! let alice = db.users().find_by_email("a@x.com").await?;
//! let cheap = db.properties().list_by_price_range(200_000, 300_000).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;

use sqlx::PgPool;

pub use config::DatabaseConfig;
pub use db::repos::*;
pub use error::{DbError, Result, ResultExt};

/// Handle on the shared connection pool
///
/// Cheap to clone; every clone uses the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool from config.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = db::create_pool_with_config(config).await?;
        Ok(Self::new(pool))
    }

    /// Create any missing tables.
    pub async fn migrate(&self) -> Result<()> {
        db::migrations::run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn admins(&self) -> AdminRepo<'_> {
        AdminRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    pub fn favourites(&self) -> FavouriteRepo<'_> {
        FavouriteRepo::new(&self.pool)
    }

    pub fn messages(&self) -> MessageRepo<'_> {
        MessageRepo::new(&self.pool)
    }
}
