use rusqlite::params;

use crate::domain::{MatchId, PlayerId};
use crate::errors::{with_store_context, Result};

use super::connection::DbConn;

pub fn insert_match(conn: &mut DbConn, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id";

    with_store_context(
        conn.query_row(sql, params![winner, loser], |row| row.get(0)),
        "insert match",
    )
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    with_store_context(conn.execute("DELETE FROM matches", []), "delete matches").map(|_| ())
}
