use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type MatchId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// A player's record at the time of the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl StandingEntry {
    pub fn losses(&self) -> u32 {
        self.matches - self.wins
    }
}

/// Two players drawn to meet in the next round, higher-ranked first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn between(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}
