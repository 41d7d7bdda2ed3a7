pub mod poi_url;

pub use poi_url::{extract_short_code, poi_id_from_url};
