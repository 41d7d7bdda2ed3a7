//! campus-wrapped - per-campus "wrapped" statistics resolution
//!
//! This library backs the shareable "wrapped" experience: a visitor opens a
//! per-campus link and the identifier in that link (a full POI id or a
//! previously issued short code) has to be turned into a statistics record,
//! no matter how mangled the identifier is.
//!
//! # Architecture
//! - `client`: HTTP document fetching (the two published JSON documents)
//! - `store`: page-lifetime caches over the published documents
//! - `services`: POI resolution with ordered fallbacks, share-link lookup
//! - `audio`: gesture-gated playback coordination
//! - `utils`: identifier extraction from URLs
//! - `cli`: offline data preparation (spreadsheet conversion, reverse map)
//! - `config`: environment-based configuration
//! - `system`: logging initialization

pub mod audio;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod services;
pub mod store;
pub mod structs;
pub mod system;
pub mod utils;
