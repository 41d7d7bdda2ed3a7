//! Identifier extraction from visitor URLs
//!
//! The raw identifier handed to the resolver is the last non-empty path
//! segment of the page URL after the configured base path is stripped.
//! Static hosts serve deep links through a 404 redirect that moves the
//! path into a `?/<path>` query string, so that form is the fallback.

use url::Url;

fn last_segment(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).next_back()
}

fn reject_non_ids(segment: &str) -> Option<&str> {
    if segment.is_empty() || segment == "index.html" {
        None
    } else {
        Some(segment)
    }
}

/// Raw identifier from a page URL, or `None` for the root URL.
pub fn poi_id_from_url(url: &Url, base_path: &str) -> Option<String> {
    let mut path = url.path();
    let base = base_path.trim_end_matches('/');
    if !base.is_empty() {
        if let Some(rest) = path.strip_prefix(base) {
            path = rest;
        }
    }

    last_segment(path)
        .and_then(reject_non_ids)
        .or_else(|| {
            // 404-redirect recovery: /?/{poi_id}
            url.query()
                .filter(|q| q.starts_with('/'))
                .and_then(last_segment)
                .and_then(reject_non_ids)
        })
        .map(str::to_string)
}

/// Normalizes a pasted short link down to the bare short code.
///
/// Accepts a full short URL (`https://is.gd/abc123`), a hash route
/// (`/#/abc123`) or an already-bare code. Returns `None` when nothing is
/// left after stripping.
pub fn extract_short_code(input: &str, base_path: &str) -> Option<String> {
    let mut code = input.trim();
    if code.is_empty() {
        return None;
    }

    code = code
        .strip_prefix("https://")
        .or_else(|| code.strip_prefix("http://"))
        .unwrap_or(code);

    // Drop the host part of a full URL
    if let Some((host, rest)) = code.split_once('/') {
        if host.contains('.') {
            code = rest;
        }
    }

    // Hash-routing and leading-slash prefixes, in any nesting
    loop {
        let trimmed = code.trim_start_matches('/');
        let stripped = trimmed.strip_prefix("#/").unwrap_or(trimmed);
        if stripped == code {
            break;
        }
        code = stripped;
    }
    let mut code = code.trim_matches('/');

    // Codes pasted as site-relative paths still carry the base path
    let base = base_path.trim_matches('/');
    if !base.is_empty() {
        if let Some(rest) = code.strip_prefix(base) {
            code = rest.trim_matches('/');
        }
    }

    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_last_path_segment_is_the_id() {
        let url = parse("https://example.org/abc123");
        assert_eq!(poi_id_from_url(&url, "/"), Some("abc123".to_string()));
    }

    #[test]
    fn test_base_path_is_stripped() {
        let url = parse("https://example.org/wrapped/abc123");
        assert_eq!(
            poi_id_from_url(&url, "/wrapped/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_base_path_alone_is_root() {
        let url = parse("https://example.org/wrapped/");
        assert_eq!(poi_id_from_url(&url, "/wrapped/"), None);
    }

    #[test]
    fn test_root_url_yields_none() {
        let url = parse("https://example.org/");
        assert_eq!(poi_id_from_url(&url, "/"), None);
    }

    #[test]
    fn test_index_html_yields_none() {
        let url = parse("https://example.org/index.html");
        assert_eq!(poi_id_from_url(&url, "/"), None);
    }

    #[test]
    fn test_query_fallback_for_redirected_deep_link() {
        let url = parse("https://example.org/?/abc123");
        assert_eq!(poi_id_from_url(&url, "/"), Some("abc123".to_string()));
    }

    #[test]
    fn test_query_without_slash_prefix_is_ignored() {
        let url = parse("https://example.org/?utm_source=share");
        assert_eq!(poi_id_from_url(&url, "/"), None);
    }

    #[test]
    fn test_extract_short_code_from_full_url() {
        assert_eq!(
            extract_short_code("https://is.gd/abc123", "/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_short_code_from_hash_route() {
        assert_eq!(
            extract_short_code("/#/abc123", "/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_short_code_bare_code_passes_through() {
        assert_eq!(
            extract_short_code("abc123", "/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_short_code_strips_base_path() {
        assert_eq!(
            extract_short_code("/wrapped/abc123", "/wrapped/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_short_code_trailing_slash() {
        assert_eq!(
            extract_short_code("https://is.gd/abc123/", "/"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_short_code_empty_input() {
        assert_eq!(extract_short_code("", "/"), None);
        assert_eq!(extract_short_code("   ", "/"), None);
        assert_eq!(extract_short_code("https://is.gd/", "/"), None);
    }
}
