//! POI resolution
//!
//! Turns the raw identifier extracted from a visitor's URL into the
//! `StatRecord` to display. The identifier may be a full POI id, a short
//! code from an earlier shortening run, or garbage.
//!
//! # Fallback policy
//!
//! ```text
//! raw id → trim ──→ empty? ──────────────→ bundled default
//!                 └→ short-code lookup ──→ rewrites the working id (miss: keep it)
//!                    exact key match ────→ record
//!                    case-insensitive ───→ record
//!                    bundled default ────→ record (unconditional)
//! ```
//!
//! - Reverse-map failures are absorbed; the working id continues unchanged.
//! - A statistics-store fetch/parse failure is the one error `resolve`
//!   propagates; `resolve_or_default` is the call-site safety net that
//!   catches it and substitutes the default record.
//! - Every other path lands on a record, so neither entry point can panic
//!   or return nothing.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::client::DocumentSource;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::store::{ShortCodeMap, StatStore};
use crate::structs::{CampusStats, StatRecord};

/// One tier of the resolution chain. The chain itself is data
/// (`RESOLUTION_ORDER`), not control flow, so tests can assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTier {
    /// Reverse-map lookup; on a hit the working id is replaced
    ShortCode,
    /// Direct key match in the statistics store
    ExactKey,
    /// Scan of store keys ignoring letter case, in natural key order.
    /// Keys differing only by case are a data-integrity violation in the
    /// published document, not something this tier arbitrates.
    CaseInsensitiveKey,
    /// Unconditional terminal tier
    BundledDefault,
}

pub const RESOLUTION_ORDER: &[FallbackTier] = &[
    FallbackTier::ShortCode,
    FallbackTier::ExactKey,
    FallbackTier::CaseInsensitiveKey,
    FallbackTier::BundledDefault,
];

static BUNDLED_DEFAULT: Lazy<StatRecord> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/campus.json")).unwrap_or_else(|e| {
        warn!("bundled default record is malformed, using minimal record: {}", e);
        minimal_record()
    })
});

/// Last-resort record when even the bundled default cannot be parsed.
fn minimal_record() -> StatRecord {
    StatRecord {
        poi_id: "default".to_string(),
        college_name: "Campus".to_string(),
        stats: CampusStats {
            favourite_dish: "biryani".to_string(),
            official_12am_craving: "burger".to_string(),
            ..CampusStats::default()
        },
    }
}

/// Resolves raw URL identifiers to statistics records.
///
/// Constructed once per application instance; holds the two document
/// caches privately, so every consumer sharing a resolver also shares the
/// page-lifetime caches.
pub struct PoiResolver {
    stats: StatStore,
    codes: ShortCodeMap,
}

impl PoiResolver {
    pub fn new(source: Arc<dyn DocumentSource>, config: &AppConfig) -> Self {
        PoiResolver {
            stats: StatStore::new(source.clone(), config.stats_url()),
            codes: ShortCodeMap::new(source, config.reverse_map_url()),
        }
    }

    /// The record shipped with the application, used when nothing matches.
    pub fn default_record() -> StatRecord {
        BUNDLED_DEFAULT.clone()
    }

    /// Resolves an identifier through `RESOLUTION_ORDER`.
    ///
    /// `None`, empty and whitespace-only input are the expected root-URL
    /// case and resolve straight to the default record. The only error is
    /// a statistics-store fetch/parse failure.
    pub async fn resolve(&self, raw_id: Option<&str>) -> Result<StatRecord> {
        let Some(id) = raw_id.map(str::trim).filter(|s| !s.is_empty()) else {
            debug!("no POI specified, using default record");
            return Ok(Self::default_record());
        };

        let mut working = id.to_string();

        for tier in RESOLUTION_ORDER {
            match tier {
                FallbackTier::ShortCode => {
                    if let Some(poi_id) = self.codes.lookup(&working).await {
                        debug!("short code {} resolved to POI {}", working, poi_id);
                        working = poi_id;
                    }
                }
                FallbackTier::ExactKey => {
                    let store = self.stats.load().await?;
                    if let Some(record) = store.get(&working) {
                        return Ok(record.clone());
                    }
                }
                FallbackTier::CaseInsensitiveKey => {
                    let store = self.stats.load().await?;
                    let lowered = working.to_lowercase();
                    if let Some(record) = store
                        .iter()
                        .find(|(key, _)| key.to_lowercase() == lowered)
                        .map(|(_, record)| record)
                    {
                        debug!("POI {} matched ignoring case", working);
                        return Ok(record.clone());
                    }
                }
                FallbackTier::BundledDefault => {
                    warn!("POI {} not found, using default record", working);
                    return Ok(Self::default_record());
                }
            }
        }

        // RESOLUTION_ORDER ends with the unconditional tier
        Ok(Self::default_record())
    }

    /// Total version of [`resolve`](Self::resolve): a statistics-store
    /// failure degrades to the default record instead of propagating.
    pub async fn resolve_or_default(&self, raw_id: Option<&str>) -> StatRecord {
        match self.resolve(raw_id).await {
            Ok(record) => record,
            Err(e) => {
                warn!("statistics store unavailable, using default record: {}", e);
                Self::default_record()
            }
        }
    }
}
