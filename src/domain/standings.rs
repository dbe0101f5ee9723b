use std::cmp::Reverse;
use std::collections::HashMap;

use super::models::{Match, Player, PlayerId, StandingEntry};

/// Orders standings by wins, most first. Equal records fall back to the
/// lower player id so the ranking is a total order.
pub fn rank(mut entries: Vec<StandingEntry>) -> Vec<StandingEntry> {
    entries.sort_by_key(|entry| (Reverse(entry.wins), entry.id));
    entries
}

/// Counts wins and matches played for every player, including players
/// without a single recorded match. Results come back ranked.
pub fn tally(players: &[Player], matches: &[Match]) -> Vec<StandingEntry> {
    let mut records = count_records(matches);

    let entries = players
        .iter()
        .map(|player| {
            let (wins, played) = records.remove(&player.id).unwrap_or((0, 0));
            StandingEntry {
                id: player.id,
                name: player.name.clone(),
                wins,
                matches: played,
            }
        })
        .collect();

    rank(entries)
}

fn count_records(matches: &[Match]) -> HashMap<PlayerId, (u32, u32)> {
    let mut records: HashMap<PlayerId, (u32, u32)> = HashMap::new();
    for m in matches {
        let winner = records.entry(m.winner).or_insert((0, 0));
        winner.0 += 1;
        winner.1 += 1;
        records.entry(m.loser).or_insert((0, 0)).1 += 1;
    }
    records
}
