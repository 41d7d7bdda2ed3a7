use std::sync::Arc;

use tracing::debug;

use crate::client::DocumentSource;
use crate::config::AppConfig;
use crate::store::ShareLinkStore;

/// Share URL lookup.
///
/// Prefers the masked (public) link generated offline for the POI; when
/// none exists the visitor's current URL is the share URL. Nothing here
/// can fail outward.
pub struct ShareService {
    links: ShareLinkStore,
}

impl ShareService {
    pub fn new(source: Arc<dyn DocumentSource>, config: &AppConfig) -> Self {
        ShareService {
            links: ShareLinkStore::new(source, config.masked_links_url(), config.short_links_url()),
        }
    }

    /// URL to put on the share button.
    pub async fn share_url(&self, poi_id: &str, current_url: &str) -> String {
        match self.links.masked_link(poi_id).await {
            Some(masked) => masked,
            None => {
                debug!("no masked link for POI {}, sharing current URL", poi_id);
                current_url.to_string()
            }
        }
    }

    /// Forward short URL for the POI, if one was generated.
    pub async fn short_url(&self, poi_id: &str) -> Option<String> {
        self.links.short_url(poi_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::client::testutil::StubSource;

    const MASKED_URL: &str = "http://127.0.0.1:8080/data/masked-links.json";

    #[tokio::test]
    async fn test_share_url_prefers_masked_link() {
        let source = Arc::new(StubSource::new(HashMap::from([(
            MASKED_URL.to_string(),
            json!({ "abc123": "https://tinyurl.com/masked1" }),
        )])));
        let service = ShareService::new(source, &AppConfig::default());
        assert_eq!(
            service.share_url("abc123", "https://example.org/abc123").await,
            "https://tinyurl.com/masked1"
        );
    }

    #[tokio::test]
    async fn test_share_url_falls_back_to_current_url() {
        let source = Arc::new(StubSource::new(HashMap::new()));
        let service = ShareService::new(source, &AppConfig::default());
        assert_eq!(
            service.share_url("abc123", "https://example.org/abc123").await,
            "https://example.org/abc123"
        );
    }
}
