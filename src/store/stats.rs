use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::client::DocumentSource;
use crate::errors::{Result, WrappedError};
use crate::structs::StatRecord;

/// Cache over the published statistics document (POI id -> `StatRecord`).
///
/// This is the resolver's primary document: a failed fetch or a malformed
/// body is surfaced to the caller rather than absorbed. A failed load does
/// not poison the slot, so a later call retries the fetch.
///
/// The map is keyed in sorted order, which is the order the
/// case-insensitive fallback scans in.
pub struct StatStore {
    url: String,
    source: Arc<dyn DocumentSource>,
    slot: OnceCell<BTreeMap<String, StatRecord>>,
}

impl StatStore {
    pub fn new(source: Arc<dyn DocumentSource>, url: String) -> Self {
        StatStore {
            url,
            source,
            slot: OnceCell::new(),
        }
    }

    /// Returns the cached map, fetching it on first use.
    pub async fn load(&self) -> Result<&BTreeMap<String, StatRecord>> {
        self.slot
            .get_or_try_init(|| async {
                let value = self.source.fetch_json(&self.url).await?;
                let map: BTreeMap<String, StatRecord> = serde_json::from_value(value)
                    .map_err(|e| {
                        WrappedError::serialization(format!(
                            "statistics document {} is malformed: {}",
                            self.url, e
                        ))
                    })?;
                info!("statistics store loaded: {} records", map.len());
                Ok(map)
            })
            .await
    }

    /// Whether the slot has been populated (test observability).
    pub fn is_loaded(&self) -> bool {
        self.slot.initialized()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::client::testutil::StubSource;

    const URL: &str = "http://data.test/data/pois.json";

    fn record_json(poi_id: &str) -> serde_json::Value {
        json!({
            "poi_id": poi_id,
            "college_name": "X Institute",
            "stats": {
                "favourite_dish": "biryani",
                "largest_order_value": 2500,
                "unofficial_favorite_restaurant": "Hotel Highway",
                "official_12am_craving": "burger",
                "max_orders_in_a_week": 19,
                "max_pizzas_single_day": 44,
                "max_biryanis_single_day": 61
            }
        })
    }

    fn store_with(doc: serde_json::Value) -> (Arc<StubSource>, StatStore) {
        let source = Arc::new(StubSource::new(HashMap::from([(URL.to_string(), doc)])));
        let store = StatStore::new(source.clone(), URL.to_string());
        (source, store)
    }

    #[tokio::test]
    async fn test_load_parses_records() {
        let (_, store) = store_with(json!({ "abc123": record_json("abc123") }));
        let map = store.load().await.unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["abc123"].college_name, "X Institute");
        assert_eq!(map["abc123"].stats.largest_order_value, 2500);
    }

    #[tokio::test]
    async fn test_sequential_loads_fetch_once() {
        let (source, store) = store_with(json!({ "abc123": record_json("abc123") }));
        store.load().await.unwrap();
        store.load().await.unwrap();
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let (source, store) = store_with(json!({ "abc123": record_json("abc123") }));
        let (a, b) = tokio::join!(store.load(), store.load());
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates_and_slot_stays_empty() {
        let source = Arc::new(StubSource::new(HashMap::new()));
        let store = StatStore::new(source.clone(), URL.to_string());

        assert!(store.load().await.is_err());
        assert!(!store.is_loaded());

        // A later call retries rather than serving a cached error
        assert!(store.load().await.is_err());
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_hard_error() {
        let (_, store) = store_with(json!(["not", "a", "map"]));
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, WrappedError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_missing_stats_fields_default_to_zero() {
        let (_, store) = store_with(json!({
            "abc123": {
                "poi_id": "abc123",
                "college_name": "X Institute",
                "stats": { "favourite_dish": "momos" }
            }
        }));
        let map = store.load().await.unwrap();
        assert_eq!(map["abc123"].stats.favourite_dish, "momos");
        assert_eq!(map["abc123"].stats.max_pizzas_single_day, 0);
    }
}
