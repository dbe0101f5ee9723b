use rusqlite::params;

use crate::domain::PlayerId;
use crate::errors::{with_store_context, Result};

use super::connection::DbConn;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<PlayerId> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id";

    with_store_context(
        conn.query_row(sql, params![name], |row| row.get(0)),
        "insert player",
    )
}

pub fn count_players(conn: &mut DbConn) -> Result<u32> {
    let sql = "SELECT COUNT(*) FROM players";

    with_store_context(conn.query_row(sql, [], |row| row.get(0)), "count players")
}

/// Removes every player together with every match. Ids restart from 1.
pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let tx = with_store_context(conn.transaction(), "begin player reset")?;

    with_store_context(tx.execute("DELETE FROM matches", []), "delete matches")?;
    with_store_context(tx.execute("DELETE FROM players", []), "delete players")?;

    with_store_context(tx.commit(), "commit player reset")
}
