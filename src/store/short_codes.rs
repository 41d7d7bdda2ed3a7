use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::client::DocumentSource;
use crate::errors::{Result, WrappedError};

/// Cache over the published reverse map (short code -> POI id).
///
/// Short codes are an optional convenience: a missing document, a failed
/// fetch or a malformed body never reaches the caller. Lookups are
/// case-sensitive, matching the codes as issued.
pub struct ShortCodeMap {
    url: String,
    source: Arc<dyn DocumentSource>,
    slot: OnceCell<BTreeMap<String, String>>,
}

impl ShortCodeMap {
    pub fn new(source: Arc<dyn DocumentSource>, url: String) -> Self {
        ShortCodeMap {
            url,
            source,
            slot: OnceCell::new(),
        }
    }

    async fn load(&self) -> Result<&BTreeMap<String, String>> {
        self.slot
            .get_or_try_init(|| async {
                let value = self.source.fetch_json(&self.url).await?;
                let map: BTreeMap<String, String> =
                    serde_json::from_value(value).map_err(WrappedError::from)?;
                debug!("reverse map loaded: {} short codes", map.len());
                Ok(map)
            })
            .await
    }

    /// Resolves a short code to its POI id. Any failure is treated as
    /// "no mapping available"; the slot stays empty so a later lookup
    /// retries the fetch.
    pub async fn lookup(&self, code: &str) -> Option<String> {
        match self.load().await {
            Ok(map) => map.get(code).cloned(),
            Err(e) => {
                warn!("reverse map unavailable, skipping short-code lookup: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::client::testutil::StubSource;

    const URL: &str = "http://data.test/data/short-links-reverse.json";

    fn map_with(doc: serde_json::Value) -> (Arc<StubSource>, ShortCodeMap) {
        let source = Arc::new(StubSource::new(HashMap::from([(URL.to_string(), doc)])));
        let map = ShortCodeMap::new(source.clone(), URL.to_string());
        (source, map)
    }

    #[tokio::test]
    async fn test_lookup_resolves_code() {
        let (_, map) = map_with(json!({ "xy9": "abc123" }));
        assert_eq!(map.lookup("xy9").await, Some("abc123".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let (_, map) = map_with(json!({ "xy9": "abc123" }));
        assert_eq!(map.lookup("XY9").await, None);
    }

    #[tokio::test]
    async fn test_lookups_share_one_fetch() {
        let (source, map) = map_with(json!({ "xy9": "abc123" }));
        let (a, b) = tokio::join!(map.lookup("xy9"), map.lookup("nope"));
        assert_eq!(a, Some("abc123".to_string()));
        assert_eq!(b, None);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absorbed_and_retried() {
        let source = Arc::new(StubSource::new(HashMap::new()));
        let map = ShortCodeMap::new(source.clone(), URL.to_string());

        assert_eq!(map.lookup("xy9").await, None);
        assert_eq!(map.lookup("xy9").await, None);
        // Nothing was cached after the failures
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_document_is_absorbed() {
        let (_, map) = map_with(json!("not a map"));
        assert_eq!(map.lookup("xy9").await, None);
    }
}
