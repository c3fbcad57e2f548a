//! Near-Earth-object module
//!
//! Pulls the NASA NeoWs feed for a date range, flattens it into
//! [`AsteroidRecord`]s, merges the bundled catalog and classifies the
//! combined set into named / dangerous / non-dangerous groups.
//!
//! ## Main Components
//! - `Catalog`: the fixed set of well-known asteroids
//! - `NeoFeed` / `NasaFeedClient`: upstream feed access
//! - `normalizer`: raw feed record -> `AsteroidRecord`
//! - `classifier`: partition + diameter ordering

mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::{FetchError, NormalizeError};

mod types;
pub use types::{
    CloseApproach, DateRange, DiameterRange, EstimatedDiameter, FeedResponse, OrbitalData,
    RawNeo, RelativeVelocity,
};

pub mod normalizer;
pub use normalizer::{average_diameter, flatten_feed, normalize};

mod client;
pub use client::{NasaFeedClient, NeoFeed};

pub mod classifier;
pub use classifier::classify;

pub use neo_common::{AsteroidGroups, AsteroidRecord};
