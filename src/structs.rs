pub use serde::{Deserialize, Serialize};

/// One campus's statistics snapshot. Map key in the published statistics
/// document equals `poi_id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatRecord {
    pub poi_id: String,
    pub college_name: String,
    pub stats: CampusStats,
}

/// Fixed-shape stats sub-record. Missing fields in published data degrade
/// to empty strings / zero rather than failing the whole document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CampusStats {
    #[serde(default)]
    pub favourite_dish: String,
    #[serde(default)]
    pub largest_order_value: u32,
    #[serde(default)]
    pub unofficial_favorite_restaurant: String,
    #[serde(default)]
    pub official_12am_craving: String,
    #[serde(default)]
    pub max_orders_in_a_week: u32,
    #[serde(default)]
    pub max_pizzas_single_day: u32,
    #[serde(default)]
    pub max_biryanis_single_day: u32,
}

/// Entry in the forward short-links document (POI id -> short URL),
/// produced by the offline shortening runs.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRecord {
    pub short_url: String,
    #[serde(default)]
    pub long_url: String,
    #[serde(default)]
    pub college_name: String,
    #[serde(default)]
    pub created_at: String,
}
