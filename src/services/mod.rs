pub mod tournament;

pub use tournament::Tournament;
