pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::{SqliteStore, TournamentStore};
use crate::domain::PlayerId;
use crate::services::Tournament;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn open_tournament(config: &AppConfig) -> Result<Tournament<SqliteStore>> {
    let store = SqliteStore::open(&config.store)
        .with_context(|| format!("Failed to open {}", config.store.database_path))?;
    Ok(Tournament::new(store))
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = AppConfig::new().with_database_path(cli.database);
    let tournament = open_tournament(&config)?;
    execute_command(&tournament, &cli.command)
}

pub fn execute_command<S: TournamentStore>(
    tournament: &Tournament<S>,
    command: &Command,
) -> Result<()> {
    match command {
        Command::Register { name } => handle_register(tournament, name),
        Command::Report { winner, loser } => handle_report(tournament, *winner, *loser),
        Command::Standings { json } => handle_standings(tournament, *json),
        Command::Pairings { json } => handle_pairings(tournament, *json),
        Command::Count => handle_count(tournament),
        Command::ResetMatches => Ok(tournament.reset_matches()?),
        Command::ResetPlayers => Ok(tournament.reset_players()?),
    }
}

pub fn handle_register<S: TournamentStore>(tournament: &Tournament<S>, name: &str) -> Result<()> {
    let id = tournament.register_player(name)?;
    println!("{}", id);
    Ok(())
}

pub fn handle_report<S: TournamentStore>(
    tournament: &Tournament<S>,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<()> {
    tournament
        .report_match(winner, loser)
        .with_context(|| format!("Failed to report #{} beating #{}", winner, loser))
}

pub fn handle_standings<S: TournamentStore>(tournament: &Tournament<S>, json: bool) -> Result<()> {
    let standings = tournament.standings()?;
    let rendered = if json {
        output::to_json(&standings)?
    } else {
        output::render_standings(&standings)
    };
    println!("{}", rendered);
    Ok(())
}

pub fn handle_pairings<S: TournamentStore>(tournament: &Tournament<S>, json: bool) -> Result<()> {
    let pairings = tournament.pairings()?;
    let rendered = if json {
        output::to_json(&pairings)?
    } else {
        output::render_pairings(&pairings)
    };
    println!("{}", rendered);
    Ok(())
}

pub fn handle_count<S: TournamentStore>(tournament: &Tournament<S>) -> Result<()> {
    println!("{}", tournament.count_players()?);
    Ok(())
}
