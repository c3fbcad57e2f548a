use serde::{Deserialize, Serialize};

/// Placeholder used when the first observation date is not reported
pub const UNKNOWN_OBSERVATION: &str = "Unknown";

/// A single asteroid, either from the bundled catalog or the live feed.
///
/// Catalog entries carry a `description` and never a `velocity`; feed
/// entries carry a `velocity` and never a `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRecord {
    /// Display name, not guaranteed unique
    pub name: String,
    /// Estimated diameter in meters
    pub diameter: f64,
    /// Upstream "potentially hazardous" flag
    pub is_dangerous: bool,
    /// First observation date, or "Unknown"
    pub first_observation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Relative velocity at closest approach, km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<String>,
}

impl AsteroidRecord {
    /// Build a catalog entry
    pub fn catalog(
        name: impl Into<String>,
        diameter: f64,
        first_observation: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            diameter,
            is_dangerous: false,
            first_observation: first_observation.into(),
            description: Some(description.into()),
            velocity: None,
        }
    }

    /// Build a feed entry
    pub fn feed(
        name: impl Into<String>,
        diameter: f64,
        is_dangerous: bool,
        first_observation: Option<String>,
        velocity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            diameter,
            is_dangerous,
            first_observation: first_observation
                .unwrap_or_else(|| UNKNOWN_OBSERVATION.to_string()),
            description: None,
            velocity: Some(velocity.into()),
        }
    }
}

/// Classified result served by `/api/asteroids`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsteroidGroups {
    pub named: Vec<AsteroidRecord>,
    pub dangerous: Vec<AsteroidRecord>,
    pub non_dangerous: Vec<AsteroidRecord>,
}

impl AsteroidGroups {
    /// Total number of records across all three groups
    pub fn len(&self) -> usize {
        self.named.len() + self.dangerous.len() + self.non_dangerous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every record, group by group
    pub fn iter(&self) -> impl Iterator<Item = &AsteroidRecord> {
        self.named
            .iter()
            .chain(self.dangerous.iter())
            .chain(self.non_dangerous.iter())
    }
}
