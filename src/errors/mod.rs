use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
    /// Connection, pool or query failure in the underlying store
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Pairings need an even number of ranked players
    #[error("Cannot pair an odd number of players ({players})")]
    InvalidPairingInput { players: usize },

    /// The store rejected a write on an integrity constraint
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl TournamentError {
    pub fn store(context: &str, cause: impl std::fmt::Display) -> Self {
        TournamentError::StoreUnavailable(format!("{}: {}", context, cause))
    }
}

impl From<r2d2::Error> for TournamentError {
    fn from(e: r2d2::Error) -> Self {
        TournamentError::store("Failed to get database connection from pool", e)
    }
}

impl From<rusqlite::Error> for TournamentError {
    fn from(e: rusqlite::Error) -> Self {
        if is_constraint_violation(&e) {
            TournamentError::Validation(e.to_string())
        } else {
            TournamentError::store("Query failed", e)
        }
    }
}

fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e.sqlite_error_code(),
        Some(rusqlite::ErrorCode::ConstraintViolation)
    )
}

/// Wrap a store result with a description of the failed operation
pub fn with_store_context<T>(result: rusqlite::Result<T>, operation: &str) -> Result<T> {
    result.map_err(|e| match TournamentError::from(e) {
        TournamentError::StoreUnavailable(cause) => {
            TournamentError::StoreUnavailable(format!("Failed to {}: {}", operation, cause))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_pairing_message_names_player_count() {
        let err = TournamentError::InvalidPairingInput { players: 3 };
        assert_eq!(err.to_string(), "Cannot pair an odd number of players (3)");
    }

    #[test]
    fn test_query_failure_is_store_unavailable() {
        let err = TournamentError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, TournamentError::StoreUnavailable(_)));
    }

    #[test]
    fn test_context_is_prefixed() {
        let result: rusqlite::Result<()> = Err(rusqlite::Error::InvalidQuery);
        let err = with_store_context(result, "count players").unwrap_err();
        assert!(err.to_string().contains("Failed to count players"));
    }
}
