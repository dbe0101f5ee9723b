use r2d2_sqlite::SqliteConnectionManager;

use crate::config::StoreSettings;
use crate::errors::{Result, TournamentError};

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StoreSettings) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(&settings.database_path));

    r2d2::Pool::builder()
        .max_size(settings.pool_size.max(1))
        .connection_timeout(settings.connection_timeout)
        .build(manager)
        .map_err(|e| TournamentError::store("Failed to create database connection pool", e))
}

/// A private in-memory database. Every SQLite memory connection is its own
/// database, so the pool holds exactly one connection and never recycles it.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());

    r2d2::Pool::builder()
        .max_size(1)
        .max_lifetime(None)
        .idle_timeout(None)
        .build(manager)
        .map_err(|e| TournamentError::store("Failed to create in-memory database", e))
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    Ok(pool.get()?)
}
