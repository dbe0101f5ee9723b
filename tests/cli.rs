use swiss_tournament::cli::Command;
use swiss_tournament::database::MemoryStore;
use swiss_tournament::errors::TournamentError;
use swiss_tournament::execute_command;
use swiss_tournament::services::Tournament;

fn run(tournament: &Tournament<MemoryStore>, command: Command) -> anyhow::Result<()> {
    execute_command(tournament, &command)
}

#[test]
fn test_commands_drive_a_round() {
    let tournament = Tournament::new(MemoryStore::new());

    for name in ["Ann", "Bob"] {
        run(&tournament, Command::Register { name: name.to_string() }).unwrap();
    }
    run(&tournament, Command::Report { winner: 2, loser: 1 }).unwrap();
    run(&tournament, Command::Standings { json: true }).unwrap();
    run(&tournament, Command::Pairings { json: false }).unwrap();

    let standings = tournament.standings().unwrap();
    assert_eq!(standings[0].name, "Bob");
    assert_eq!(standings[0].wins, 1);

    run(&tournament, Command::ResetMatches).unwrap();
    assert_eq!(tournament.standings().unwrap()[0].wins, 0);

    run(&tournament, Command::ResetPlayers).unwrap();
    run(&tournament, Command::Count).unwrap();
    assert_eq!(tournament.count_players().unwrap(), 0);
}

#[test]
fn test_odd_pairings_surface_typed_error() {
    let tournament = Tournament::new(MemoryStore::new());
    run(&tournament, Command::Register { name: "Solo".to_string() }).unwrap();

    let err = run(&tournament, Command::Pairings { json: false }).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TournamentError>(),
        Some(TournamentError::InvalidPairingInput { players: 1 })
    ));
}

#[test]
fn test_report_error_keeps_cause() {
    let tournament = Tournament::new(MemoryStore::new());

    let err = run(&tournament, Command::Report { winner: 1, loser: 2 }).unwrap_err();

    assert!(err.to_string().contains("Failed to report #1 beating #2"));
    assert!(matches!(
        err.downcast_ref::<TournamentError>(),
        Some(TournamentError::Validation(_))
    ));
}
