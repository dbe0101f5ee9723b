pub mod models;
pub mod pairing;
pub mod standings;

pub use models::*;
pub use pairing::pair_adjacent;
