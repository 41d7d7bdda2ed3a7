//! Page-lifetime document stores
//!
//! Each store wraps one published JSON document behind a lazily populated
//! cache slot. A slot is filled at most once per store lifetime; concurrent
//! callers during the initial load share a single fetch instead of issuing
//! redundant requests (tokio `OnceCell` initialization semantics).
//!
//! Failure policy differs per document:
//! - statistics store: fetch/parse failure is a hard error for the caller
//! - reverse map and share links: failures are absorbed, lookups return
//!   `None`, and the slot stays empty so a later call may retry

mod share_links;
mod short_codes;
mod stats;

pub use share_links::ShareLinkStore;
pub use short_codes::ShortCodeMap;
pub use stats::StatStore;
