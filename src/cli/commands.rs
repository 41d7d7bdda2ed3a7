//! Data-preparation command implementations
//!
//! These are the offline steps that produce the published documents: the
//! spreadsheet conversion and the reverse-map derivation. Third-party
//! shortener APIs are not called from here; the reverse map is derived
//! from documents an earlier shortening run already wrote.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::client::HttpDocumentSource;
use crate::config::AppConfig;
use crate::errors::{Result, WrappedError};
use crate::services::PoiResolver;
use crate::structs::{CampusStats, ShortLinkRecord, StatRecord};
use crate::utils::extract_short_code;

// Spreadsheet column headers, as exported from the answers sheet
const COL_POI_ID: &str = "POI Id";
const COL_NAME: &str = "Name";
const COL_FAVOURITE_DISH: &str = "Favourite dish of your college";
const COL_LARGEST_ORDER: &str = "Largest value food order at your college";
const COL_UNOFFICIAL_RESTAURANT: &str = "unofficial campus favorite restaurant";
const COL_MIDNIGHT_CRAVING: &str = "The official 12 AM craving / dish";
const COL_MAX_WEEK_ORDERS: &str = "Max number of orders in a week for a student in your college";
const COL_MAX_PIZZAS: &str = "Highest number of pizzas ordered on a single day";
const COL_MAX_BIRYANIS: &str = "Highest number of biryanis ordered on a single day";

fn field<'a>(headers: &csv::StringRecord, record: &'a csv::StringRecord, name: &str) -> &'a str {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .and_then(|idx| record.get(idx))
        .unwrap_or("")
        .trim()
}

fn field_u32(headers: &csv::StringRecord, record: &csv::StringRecord, name: &str) -> u32 {
    field(headers, record, name).parse().unwrap_or(0)
}

/// Converts the answers spreadsheet into the statistics store document.
/// Returns the number of records written.
pub fn run_convert(input: &Path, output: &Path) -> Result<usize> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(input)?;
    let headers = reader.headers()?.clone();

    if !headers.iter().any(|h| h.trim() == COL_POI_ID) {
        return Err(WrappedError::validation(format!(
            "header row of {} has no \"{}\" column",
            input.display(),
            COL_POI_ID
        )));
    }

    let mut records: BTreeMap<String, StatRecord> = BTreeMap::new();
    for row in reader.records() {
        let row = row?;
        let poi_id = field(&headers, &row, COL_POI_ID);
        if poi_id.is_empty() {
            warn!("skipping row without POI id");
            continue;
        }

        records.insert(
            poi_id.to_string(),
            StatRecord {
                poi_id: poi_id.to_string(),
                college_name: field(&headers, &row, COL_NAME).to_string(),
                stats: CampusStats {
                    favourite_dish: field(&headers, &row, COL_FAVOURITE_DISH).to_lowercase(),
                    largest_order_value: field_u32(&headers, &row, COL_LARGEST_ORDER),
                    unofficial_favorite_restaurant: field(
                        &headers,
                        &row,
                        COL_UNOFFICIAL_RESTAURANT,
                    )
                    .to_string(),
                    official_12am_craving: field(&headers, &row, COL_MIDNIGHT_CRAVING)
                        .to_lowercase(),
                    max_orders_in_a_week: field_u32(&headers, &row, COL_MAX_WEEK_ORDERS),
                    max_pizzas_single_day: field_u32(&headers, &row, COL_MAX_PIZZAS),
                    max_biryanis_single_day: field_u32(&headers, &row, COL_MAX_BIRYANIS),
                },
            },
        );
    }

    fs::write(output, serde_json::to_string_pretty(&records)?)?;
    info!("converted {} POI records to {}", records.len(), output.display());
    Ok(records.len())
}

/// Derives the reverse map (short code -> POI id) from the forward
/// short-links document. Last write wins on duplicate codes.
pub fn run_reverse_map(short_links: &Path, output: &Path) -> Result<usize> {
    let body = fs::read_to_string(short_links)?;
    let forward: BTreeMap<String, ShortLinkRecord> = serde_json::from_str(&body)?;

    let mut reverse: BTreeMap<String, String> = BTreeMap::new();
    for (poi_id, entry) in &forward {
        match extract_short_code(&entry.short_url, "/") {
            Some(code) => {
                reverse.insert(code, poi_id.clone());
            }
            None => {
                warn!("short link for POI {} has no usable code: {}", poi_id, entry.short_url);
            }
        }
    }

    fs::write(output, serde_json::to_string_pretty(&reverse)?)?;
    info!(
        "derived {} short codes from {} forward links",
        reverse.len(),
        forward.len()
    );
    Ok(reverse.len())
}

/// Resolves an identifier against the published documents and prints the
/// record as pretty JSON.
pub async fn run_resolve(id: &str, base_url: Option<String>) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(base_url) = base_url {
        config.data_base_url = base_url;
    }

    let resolver = PoiResolver::new(Arc::new(HttpDocumentSource::new()), &config);
    let record = resolver.resolve_or_default(Some(id)).await;

    println!("{} {}", "resolved".green().bold(), record.college_name);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
