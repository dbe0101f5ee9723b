use crate::errors::{Result, TournamentError};

use super::models::{Pairing, StandingEntry};

/// Pairs ranked players two at a time: first with second, third with
/// fourth, and so on. Repeat meetings are not avoided.
pub fn pair_adjacent(standings: &[StandingEntry]) -> Result<Vec<Pairing>> {
    ensure_even(standings.len())?;

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect())
}

fn ensure_even(players: usize) -> Result<()> {
    if players % 2 == 0 {
        Ok(())
    } else {
        Err(TournamentError::InvalidPairingInput { players })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, wins: u32) -> StandingEntry {
        StandingEntry {
            id,
            name: format!("Player {}", id),
            wins,
            matches: 1,
        }
    }

    #[test]
    fn test_pairs_adjacent_entries_in_order() {
        let standings = vec![entry(1, 1), entry(3, 1), entry(2, 0), entry(4, 0)];

        let pairings = pair_adjacent(&standings).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].id1, pairings[0].id2), (1, 3));
        assert_eq!((pairings[1].id1, pairings[1].id2), (2, 4));
        assert_eq!(pairings[0].name2, "Player 3");
    }

    #[test]
    fn test_odd_count_is_rejected() {
        let standings = vec![entry(1, 1), entry(2, 0), entry(3, 0)];

        let err = pair_adjacent(&standings).unwrap_err();

        assert!(matches!(err, TournamentError::InvalidPairingInput { players: 3 }));
    }

    #[test]
    fn test_empty_standings_give_no_pairings() {
        assert!(pair_adjacent(&[]).unwrap().is_empty());
    }
}
