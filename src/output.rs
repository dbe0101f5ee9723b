use colored::Colorize;
use serde::Serialize;

use crate::domain::{Pairing, StandingEntry};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_standings(standings: &[StandingEntry]) -> String {
    if standings.is_empty() {
        return "No players registered".dimmed().to_string();
    }

    let header = format!(
        "{:>4}  {:>5}  {:<24} {:>5} {:>6} {:>8}",
        "Rank", "Id", "Name", "Wins", "Losses", "Matches"
    );
    let mut lines = vec![header.as_str().bold().to_string()];

    for (rank, entry) in standings.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:>5}  {:<24} {:>5} {:>6} {:>8}",
            rank + 1,
            entry.id,
            entry.name,
            entry.wins,
            entry.losses(),
            entry.matches
        ));
    }

    lines.join("\n")
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings".dimmed().to_string();
    }

    let mut lines = vec!["Next round".bold().to_string()];
    for (table, pairing) in pairings.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {} (#{})  vs  {} (#{})",
            table + 1,
            pairing.name1,
            pairing.id1,
            pairing.name2,
            pairing.id2
        ));
    }

    lines.join("\n")
}
