use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Register a new player and print the assigned id
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i64,
        /// Id of the player who lost
        loser: i64,
    },
    /// Show players ranked by wins
    Standings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the number of registered players
    Count,
    /// Remove all match records
    ResetMatches,
    /// Remove all players and their matches
    ResetPlayers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_report_with_global_database() {
        let cli = Cli::try_parse_from(["swiss-tournament", "report", "1", "2", "--database", "t.db"])
            .unwrap();

        assert_eq!(cli.command, Command::Report { winner: 1, loser: 2 });
        assert_eq!(cli.database.as_deref(), Some("t.db"));
    }

    #[test]
    fn test_parses_kebab_case_resets() {
        let cli = Cli::try_parse_from(["swiss-tournament", "reset-players"]).unwrap();
        assert_eq!(cli.command, Command::ResetPlayers);
    }
}
