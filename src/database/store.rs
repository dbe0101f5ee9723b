use log::info;

use crate::config::StoreSettings;
use crate::domain::{PlayerId, StandingEntry};
use crate::errors::Result;

use super::connection::{create_memory_pool, create_pool, get_connection, DbPool};
use super::{matches, players, setup, standings};

/// Operations the tournament needs from persistent storage.
///
/// Implementations assign player ids, enforce referential integrity and
/// report it as [`crate::errors::TournamentError::Validation`]. Any other
/// failure must come back as `StoreUnavailable`, never as empty data.
pub trait TournamentStore {
    fn count_players(&self) -> Result<u32>;
    fn insert_player(&self, name: &str) -> Result<PlayerId>;
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()>;
    fn clear_matches(&self) -> Result<()>;
    /// Also removes every match.
    fn clear_players(&self) -> Result<()>;
    /// Win and match counts for every registered player, in no particular order.
    fn query_standings(&self) -> Result<Vec<StandingEntry>>;
}

/// SQLite-backed store. Each call checks a connection out of the pool and
/// returns it when the call ends, whether it succeeded or not.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(settings: &StoreSettings) -> Result<Self> {
        info!("Opening tournament database at {}", settings.database_path);
        Self::with_pool(create_pool(settings)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::with_pool(create_memory_pool()?)
    }

    fn with_pool(pool: DbPool) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        drop(conn);

        Ok(Self { pool })
    }
}

impl TournamentStore for SqliteStore {
    fn count_players(&self) -> Result<u32> {
        let mut conn = get_connection(&self.pool)?;
        players::count_players(&mut conn)
    }

    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        let mut conn = get_connection(&self.pool)?;
        players::insert_player(&mut conn, name)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        matches::insert_match(&mut conn, winner, loser).map(|_| ())
    }

    fn clear_matches(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        matches::delete_all(&mut conn)
    }

    fn clear_players(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        players::delete_all(&mut conn)
    }

    fn query_standings(&self) -> Result<Vec<StandingEntry>> {
        let mut conn = get_connection(&self.pool)?;
        standings::query_standings(&mut conn)
    }
}
