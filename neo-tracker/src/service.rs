use std::sync::Arc;
use tracing::{info, warn};

use neo_common::AsteroidGroups;

use crate::module::neo::{classify, Catalog, DateRange, NeoFeed};

/// Merges the catalog with the live feed and classifies the result.
///
/// Cheap to clone; used directly as router state.
#[derive(Clone)]
pub struct AsteroidService {
    catalog: Arc<Catalog>,
    feed: Arc<dyn NeoFeed>,
}

impl AsteroidService {
    pub fn new(catalog: Catalog, feed: Arc<dyn NeoFeed>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            feed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build the grouped view for `range`. A failed fetch contributes no
    /// feed records; the catalog is always present.
    pub async fn asteroid_groups(&self, range: &DateRange) -> AsteroidGroups {
        let feed_records = match self.feed.fetch(range).await {
            Ok(records) => records,
            Err(e) => {
                warn!("NEO feed unavailable, serving catalog only: {}", e);
                Vec::new()
            }
        };

        let mut all = self.catalog.entries().to_vec();
        all.extend(feed_records);

        let groups = classify(all, &self.catalog);
        info!(
            "Classified {} named, {} dangerous, {} non-dangerous",
            groups.named.len(),
            groups.dangerous.len(),
            groups.non_dangerous.len()
        );
        groups
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use neo_common::AsteroidRecord;
    use std::sync::Mutex;

    use crate::module::neo::FetchError;

    /// Feed stub returning canned records and remembering the last range
    pub(crate) struct StaticFeed {
        pub records: Vec<AsteroidRecord>,
        pub last_range: Mutex<Option<DateRange>>,
    }

    impl StaticFeed {
        pub(crate) fn new(records: Vec<AsteroidRecord>) -> Self {
            Self {
                records,
                last_range: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl NeoFeed for StaticFeed {
        async fn fetch(&self, range: &DateRange) -> Result<Vec<AsteroidRecord>, FetchError> {
            *self.last_range.lock().unwrap() = Some(range.clone());
            Ok(self.records.clone())
        }
    }

    /// Feed stub that always fails with a non-2xx status
    pub(crate) struct FailingFeed;

    #[async_trait]
    impl NeoFeed for FailingFeed {
        async fn fetch(&self, _range: &DateRange) -> Result<Vec<AsteroidRecord>, FetchError> {
            Err(FetchError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    #[tokio::test]
    async fn test_merges_catalog_and_feed() {
        let feed = Arc::new(StaticFeed::new(vec![
            AsteroidRecord::feed("(2026 QX)", 100.0, true, None, "50000"),
            AsteroidRecord::feed("(2026 QY)", 50.0, false, None, "20000"),
        ]));
        let service = AsteroidService::new(Catalog::bundled(), feed.clone());
        let range = DateRange {
            start_date: "2026-10-18".to_string(),
            end_date: "2026-10-19".to_string(),
        };

        let groups = service.asteroid_groups(&range).await;
        assert_eq!(groups.named.len(), 3);
        assert_eq!(groups.dangerous.len(), 1);
        assert_eq!(groups.non_dangerous.len(), 1);
        assert_eq!(feed.last_range.lock().unwrap().as_ref(), Some(&range));
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_catalog() {
        let service = AsteroidService::new(Catalog::bundled(), Arc::new(FailingFeed));

        let groups = service.asteroid_groups(&DateRange::default()).await;
        assert_eq!(groups.named, Catalog::bundled().entries().to_vec());
        assert!(groups.dangerous.is_empty());
        assert!(groups.non_dangerous.is_empty());
    }
}
