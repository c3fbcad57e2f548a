use std::collections::HashSet;

use neo_common::AsteroidRecord;

/// Well-known asteroids bundled with the tracker.
///
/// Name membership here is what puts a record in the `named` group.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AsteroidRecord>,
    names: HashSet<String>,
}

impl Catalog {
    pub fn new(entries: Vec<AsteroidRecord>) -> Self {
        let names = entries.iter().map(|e| e.name.clone()).collect();
        Self { entries, names }
    }

    /// Ceres, Vesta and Pallas
    pub fn bundled() -> Self {
        Self::new(vec![
            AsteroidRecord::catalog(
                "Ceres",
                939.4,
                "1801-01-01",
                "Largest object in the asteroid belt between Mars and Jupiter",
            ),
            AsteroidRecord::catalog(
                "Vesta",
                525.4,
                "1807-03-29",
                "Second-most massive and second-largest body in the asteroid belt",
            ),
            AsteroidRecord::catalog(
                "Pallas",
                512.0,
                "1802-03-28",
                "Third-largest asteroid in the asteroid belt",
            ),
        ])
    }

    pub fn entries(&self) -> &[AsteroidRecord] {
        &self.entries
    }

    /// Exact, case-sensitive name match
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
