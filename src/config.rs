//! Environment-based configuration
//!
//! All knobs come from environment variables with sensible defaults, loaded
//! through `dotenvy` in the binary before this module is consulted.

use std::env;

/// Published document paths, relative to the data base URL.
pub const STATS_DOC_PATH: &str = "data/pois.json";
pub const REVERSE_MAP_DOC_PATH: &str = "data/short-links-reverse.json";
pub const SHORT_LINKS_DOC_PATH: &str = "data/short-links.json";
pub const MASKED_LINKS_DOC_PATH: &str = "data/masked-links.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL under which the static data documents are published
    pub data_base_url: String,
    /// Public base path stripped from incoming URLs before id extraction
    pub base_path: String,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            data_base_url: env::var("WRAPPED_DATA_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            base_path: env::var("WRAPPED_BASE_PATH").unwrap_or_else(|_| "/".to_string()),
            log_level: env::var("WRAPPED_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_file: env::var("WRAPPED_LOG_FILE").ok().filter(|f| !f.is_empty()),
        }
    }

    fn document_url(&self, path: &str) -> String {
        format!("{}/{}", self.data_base_url.trim_end_matches('/'), path)
    }

    pub fn stats_url(&self) -> String {
        self.document_url(STATS_DOC_PATH)
    }

    pub fn reverse_map_url(&self) -> String {
        self.document_url(REVERSE_MAP_DOC_PATH)
    }

    pub fn short_links_url(&self) -> String {
        self.document_url(SHORT_LINKS_DOC_PATH)
    }

    pub fn masked_links_url(&self) -> String {
        self.document_url(MASKED_LINKS_DOC_PATH)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_base_url: "http://127.0.0.1:8080".to_string(),
            base_path: "/".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_joins_without_double_slash() {
        let config = AppConfig {
            data_base_url: "https://example.org/wrapped/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.stats_url(),
            "https://example.org/wrapped/data/pois.json"
        );
    }

    #[test]
    fn test_document_url_joins_without_trailing_slash() {
        let config = AppConfig {
            data_base_url: "https://example.org/wrapped".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.reverse_map_url(),
            "https://example.org/wrapped/data/short-links-reverse.json"
        );
    }

    #[test]
    fn test_default_base_path_is_root() {
        let config = AppConfig::default();
        assert_eq!(config.base_path, "/");
    }
}
