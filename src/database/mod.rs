pub mod connection;
pub mod matches;
pub mod memory;
pub mod players;
pub mod setup;
pub mod standings;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use memory::MemoryStore;
pub use store::{SqliteStore, TournamentStore};
