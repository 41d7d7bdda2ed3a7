use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::client::DocumentSource;
use crate::errors::{Result, WrappedError};
use crate::structs::ShortLinkRecord;

/// Cache over the two share-link documents: masked links (POI id -> public
/// share URL) and the forward short-links map (POI id -> shortening run
/// output). Both are optional; every failure is absorbed to `None`.
pub struct ShareLinkStore {
    masked_url: String,
    short_links_url: String,
    source: Arc<dyn DocumentSource>,
    masked_slot: OnceCell<BTreeMap<String, String>>,
    links_slot: OnceCell<BTreeMap<String, ShortLinkRecord>>,
}

impl ShareLinkStore {
    pub fn new(source: Arc<dyn DocumentSource>, masked_url: String, short_links_url: String) -> Self {
        ShareLinkStore {
            masked_url,
            short_links_url,
            source,
            masked_slot: OnceCell::new(),
            links_slot: OnceCell::new(),
        }
    }

    async fn load_masked(&self) -> Result<&BTreeMap<String, String>> {
        self.masked_slot
            .get_or_try_init(|| async {
                let value = self.source.fetch_json(&self.masked_url).await?;
                let map: BTreeMap<String, String> =
                    serde_json::from_value(value).map_err(WrappedError::from)?;
                debug!("masked links loaded: {} entries", map.len());
                Ok(map)
            })
            .await
    }

    async fn load_links(&self) -> Result<&BTreeMap<String, ShortLinkRecord>> {
        self.links_slot
            .get_or_try_init(|| async {
                let value = self.source.fetch_json(&self.short_links_url).await?;
                let map: BTreeMap<String, ShortLinkRecord> =
                    serde_json::from_value(value).map_err(WrappedError::from)?;
                debug!("short links loaded: {} entries", map.len());
                Ok(map)
            })
            .await
    }

    /// Masked (public) share URL for a POI, if one was generated.
    pub async fn masked_link(&self, poi_id: &str) -> Option<String> {
        match self.load_masked().await {
            Ok(map) => map.get(poi_id).cloned(),
            Err(e) => {
                warn!("masked links unavailable: {}", e);
                None
            }
        }
    }

    /// Forward short URL for a POI, if one was generated.
    pub async fn short_url(&self, poi_id: &str) -> Option<String> {
        match self.load_links().await {
            Ok(map) => map.get(poi_id).map(|entry| entry.short_url.clone()),
            Err(e) => {
                warn!("short links unavailable: {}", e);
                None
            }
        }
    }
}
