use crate::domain::StandingEntry;
use crate::errors::{with_store_context, Result};

use super::connection::DbConn;

/// Per-player win and match counts in one pass, without ordering.
pub fn query_standings(conn: &mut DbConn) -> Result<Vec<StandingEntry>> {
    let sql = "
        SELECT
            p.id,
            p.name,
            COALESCE(SUM(CASE WHEN m.winner = p.id THEN 1 ELSE 0 END), 0) AS wins,
            COUNT(m.id) AS matches
        FROM players p
        LEFT JOIN matches m ON m.winner = p.id OR m.loser = p.id
        GROUP BY p.id, p.name
    ";

    let mut stmt = with_store_context(conn.prepare(sql), "prepare standings query")?;
    let rows = stmt
        .query_map([], parse_standing_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>());

    with_store_context(rows, "query standings")
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<StandingEntry> {
    Ok(StandingEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
