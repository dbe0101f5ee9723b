use std::sync::{Mutex, MutexGuard};

use crate::domain::standings::tally;
use crate::domain::{Match, MatchId, Player, PlayerId, StandingEntry};
use crate::errors::{Result, TournamentError};

use super::store::TournamentStore;

#[derive(Default)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<Match>,
}

impl Tables {
    fn next_player_id(&self) -> PlayerId {
        self.players.last().map_or(1, |p| p.id + 1)
    }

    fn next_match_id(&self) -> MatchId {
        self.matches.last().map_or(1, |m| m.id + 1)
    }

    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// Process-local store with the same integrity rules as the SQLite schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|e| TournamentError::store("Memory store lock poisoned", e))
    }
}

impl TournamentStore for MemoryStore {
    fn count_players(&self) -> Result<u32> {
        Ok(self.lock()?.players.len() as u32)
    }

    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        if name.trim().is_empty() {
            return Err(TournamentError::Validation(
                "player name must not be blank".to_string(),
            ));
        }

        let mut tables = self.lock()?;
        let id = tables.next_player_id();
        tables.players.push(Player {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        if winner == loser {
            return Err(TournamentError::Validation(format!(
                "player {} cannot play against themselves",
                winner
            )));
        }

        let mut tables = self.lock()?;
        if let Some(unknown) = [winner, loser].into_iter().find(|&id| !tables.has_player(id)) {
            return Err(TournamentError::Validation(format!(
                "unknown player id {}",
                unknown
            )));
        }

        let id = tables.next_match_id();
        tables.matches.push(Match { id, winner, loser });
        Ok(())
    }

    fn clear_matches(&self) -> Result<()> {
        self.lock()?.matches.clear();
        Ok(())
    }

    fn clear_players(&self) -> Result<()> {
        let mut tables = self.lock()?;
        tables.matches.clear();
        tables.players.clear();
        Ok(())
    }

    fn query_standings(&self) -> Result<Vec<StandingEntry>> {
        let tables = self.lock()?;
        Ok(tally(&tables.players, &tables.matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_and_self_matches() {
        let store = MemoryStore::new();
        let a = store.insert_player("Ann").unwrap();

        assert!(matches!(
            store.insert_match(a, 7),
            Err(TournamentError::Validation(_))
        ));
        assert!(matches!(
            store.insert_match(a, a),
            Err(TournamentError::Validation(_))
        ));
        assert_eq!(store.query_standings().unwrap()[0].matches, 0);
    }

    #[test]
    fn test_ids_restart_after_clear() {
        let store = MemoryStore::new();
        store.insert_player("Ann").unwrap();
        store.insert_player("Bob").unwrap();

        store.clear_players().unwrap();

        assert_eq!(store.count_players().unwrap(), 0);
        assert_eq!(store.insert_player("Cid").unwrap(), 1);
    }
}
