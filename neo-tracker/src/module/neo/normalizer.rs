//! NeoWs feed record normalizer
//!
//! Maps raw feed entries onto the common [`AsteroidRecord`] shape.
//! Entries that cannot be mapped are logged and skipped.

use neo_common::AsteroidRecord;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::NormalizeError;
use super::types::{DiameterRange, FeedResponse, RawNeo};

/// Midpoint of the min/max diameter estimate
pub fn average_diameter(range: &DiameterRange) -> f64 {
    (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0
}

fn velocity_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalize one typed feed record. Only the first close approach is used.
pub fn normalize(raw: RawNeo) -> Result<AsteroidRecord, NormalizeError> {
    let approach = raw
        .close_approach_data
        .first()
        .ok_or_else(|| NormalizeError::MissingCloseApproach(raw.name.clone()))?;

    if raw.close_approach_data.len() > 1 {
        debug!(
            "{}: using first of {} close approaches",
            raw.name,
            raw.close_approach_data.len()
        );
    }

    let velocity = velocity_text(&approach.relative_velocity.kilometers_per_hour).ok_or_else(|| {
        NormalizeError::Malformed(format!("{}: kilometers_per_hour is not a number", raw.name))
    })?;

    let first_observation = raw.orbital_data.and_then(|o| o.first_observation_date);

    Ok(AsteroidRecord::feed(
        raw.name,
        average_diameter(&raw.estimated_diameter.meters),
        raw.is_potentially_hazardous_asteroid,
        first_observation,
        velocity,
    ))
}

/// Normalize one untyped feed record
pub fn normalize_value(value: Value) -> Result<AsteroidRecord, NormalizeError> {
    let raw: RawNeo =
        serde_json::from_value(value).map_err(|e| NormalizeError::Malformed(e.to_string()))?;
    normalize(raw)
}

/// Flatten every date bucket into records, in date order
pub fn flatten_feed(feed: FeedResponse) -> Vec<AsteroidRecord> {
    let mut records = Vec::new();

    for (date, entries) in feed.near_earth_objects {
        for entry in entries {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string();

            match normalize_value(entry) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping feed record {} ({}): {}", name, date, e),
            }
        }
    }

    records
}
