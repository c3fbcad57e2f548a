pub mod types;

pub use types::{AsteroidGroups, AsteroidRecord, UNKNOWN_OBSERVATION};
