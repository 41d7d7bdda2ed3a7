//! HTTP document client
//!
//! The published data documents (statistics store, reverse map, share
//! links) are plain static JSON behind HTTP GET. This module provides the
//! `DocumentSource` seam the stores fetch through, plus the production
//! implementation on top of a process-global `ureq` agent. `ureq` is
//! synchronous, so requests run on the blocking thread pool.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::Agent;

use crate::errors::{Result, WrappedError};

/// HTTP request timeout
const HTTP_TIMEOUT_SECS: u64 = 10;

/// Global HTTP agent (ureq's Agent is Send + Sync)
static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent() -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .build()
            .into()
    })
}

/// Source of published JSON documents.
///
/// The stores only ever GET whole documents, so the seam is a single
/// method. Tests substitute an in-memory implementation.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

/// Production document source: HTTP GET via the global agent.
#[derive(Default)]
pub struct HttpDocumentSource;

impl HttpDocumentSource {
    pub fn new() -> Self {
        HttpDocumentSource
    }

    /// Synchronous fetch, called from `spawn_blocking`.
    fn fetch_json_sync(url: String) -> Result<serde_json::Value> {
        let agent = get_agent();

        // Non-2xx statuses surface as ureq errors
        let resp = agent.get(&url).call().map_err(|e| {
            warn!("GET \"{}\" failed: {}", url, e);
            WrappedError::document_fetch(format!("GET {}: {}", url, e))
        })?;

        let status = resp.status();
        resp.into_body().read_json().map_err(|e| {
            warn!("GET \"{}\" (status {}) returned invalid JSON: {}", url, status, e);
            WrappedError::document_fetch(format!("invalid JSON from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        debug!("fetching document {}", url);
        let url = url.to_string();

        tokio::task::spawn_blocking(move || Self::fetch_json_sync(url))
            .await
            .unwrap_or_else(|e| {
                Err(WrappedError::document_fetch(format!(
                    "fetch task failed: {}",
                    e
                )))
            })
    }
}
