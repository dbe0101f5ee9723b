use log::{debug, info};

use crate::database::TournamentStore;
use crate::domain::{pair_adjacent, standings, Pairing, PlayerId, StandingEntry};
use crate::errors::Result;

/// A Swiss-system tournament over an explicit store handle.
///
/// Nothing is cached: standings and pairings are recomputed from the store
/// on every call.
pub struct Tournament<S: TournamentStore> {
    store: S,
}

impl<S: TournamentStore> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let id = self.store.insert_player(name)?;
        info!("Registered player {} as #{}", name, id);
        Ok(id)
    }

    pub fn count_players(&self) -> Result<u32> {
        self.store.count_players()
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        self.store.insert_match(winner, loser)?;
        info!("Recorded match: #{} beat #{}", winner, loser);
        Ok(())
    }

    /// Every registered player, most wins first, ties by ascending id.
    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        let entries = self.store.query_standings()?;
        debug!("Ranking {} players", entries.len());
        Ok(standings::rank(entries))
    }

    /// Next-round pairings. Fails with `InvalidPairingInput` when an odd
    /// number of players is registered.
    pub fn pairings(&self) -> Result<Vec<Pairing>> {
        let ranked = self.standings()?;
        let pairings = pair_adjacent(&ranked)?;
        debug!("Generated {} pairings", pairings.len());
        Ok(pairings)
    }

    pub fn reset_matches(&self) -> Result<()> {
        self.store.clear_matches()?;
        info!("Removed all match records");
        Ok(())
    }

    pub fn reset_players(&self) -> Result<()> {
        self.store.clear_players()?;
        info!("Removed all players and their matches");
        Ok(())
    }
}
