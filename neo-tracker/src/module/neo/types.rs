//! NeoWs feed payload shapes and the requested date window

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Top-level feed response.
///
/// Records are kept as raw JSON so that one malformed entry can be
/// skipped without rejecting the whole payload. The map is ordered by
/// date string, which fixes the order records are emitted in.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub element_count: Option<u64>,
    pub near_earth_objects: BTreeMap<String, Vec<serde_json::Value>>,
}

/// One entry of `near_earth_objects[date]`
#[derive(Debug, Clone, Deserialize)]
pub struct RawNeo {
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    /// Only present on some endpoints; absent in the plain feed
    #[serde(default)]
    pub orbital_data: Option<OrbitalData>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitalData {
    #[serde(default)]
    pub first_observation_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    pub relative_velocity: RelativeVelocity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    /// Upstream sends a decimal string; numbers are tolerated
    pub kilometers_per_hour: serde_json::Value,
}

/// Inclusive feed window, formatted `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    /// Fill in missing bounds: start defaults to `today`, end to the day
    /// after. Supplied values are passed through as-is.
    pub fn resolve(start: Option<String>, end: Option<String>, today: NaiveDate) -> Self {
        let start_date = start
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
        let end_date = end.filter(|s| !s.is_empty()).unwrap_or_else(|| {
            today
                .checked_add_days(Days::new(1))
                .unwrap_or(today)
                .format(DATE_FORMAT)
                .to_string()
        });

        Self { start_date, end_date }
    }

    /// Resolve against the local calendar date
    pub fn from_today(start: Option<String>, end: Option<String>) -> Self {
        Self::resolve(start, end, Local::now().date_naive())
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::from_today(None, None)
    }
}
