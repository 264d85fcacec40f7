//! Rate-limit header tracking for the Harvest client.
//!
//! Greenhouse reports the request quota on every authenticated response.
//! The client only records what the server said; it never throttles. A
//! header absent from a response leaves the prior value in place.

use reqwest::header::HeaderMap;

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const LINK_HEADER: &str = "link";

/// Server-reported request quota, captured from the most recent call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Request limit ceiling (`X-RateLimit-Limit`).
    pub limit: Option<u32>,
    /// Remaining requests in the current window (`X-RateLimit-Remaining`).
    pub remaining: Option<u32>,
    /// Raw `Link` header value, carrying pagination and rate metadata.
    pub link: Option<String>,
}

impl RateLimit {
    /// Overwrite fields from response headers, keeping prior values for
    /// headers the response did not carry.
    pub(crate) fn update(&mut self, headers: &HeaderMap) {
        if let Some(limit) = header_u32(headers, LIMIT_HEADER) {
            self.limit = Some(limit);
        }
        if let Some(remaining) = header_u32(headers, REMAINING_HEADER) {
            self.remaining = Some(remaining);
        }
        if let Some(link) = header_str(headers, LINK_HEADER) {
            self.link = Some(link);
        }
    }
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    Some(headers.get(name)?.to_str().ok()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(limit: &str, remaining: &str, link: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(LIMIT_HEADER, HeaderValue::from_str(limit).unwrap());
        map.insert(REMAINING_HEADER, HeaderValue::from_str(remaining).unwrap());
        map.insert(LINK_HEADER, HeaderValue::from_str(link).unwrap());
        map
    }

    #[test]
    fn test_update_from_headers() {
        let mut rate_limit = RateLimit::default();
        rate_limit.update(&headers(
            "20",
            "19",
            "<https://harvest.greenhouse.io/v1/candidates/?page=1&per_page=100>; rel=\"last\"",
        ));
        assert_eq!(rate_limit.limit, Some(20));
        assert_eq!(rate_limit.remaining, Some(19));
        assert_eq!(
            rate_limit.link.as_deref(),
            Some("<https://harvest.greenhouse.io/v1/candidates/?page=1&per_page=100>; rel=\"last\"")
        );
    }

    #[test]
    fn test_absent_headers_keep_prior_values() {
        let mut rate_limit = RateLimit {
            limit: Some(20),
            remaining: Some(7),
            link: Some("<prev>".to_string()),
        };
        rate_limit.update(&HeaderMap::new());
        assert_eq!(rate_limit.limit, Some(20));
        assert_eq!(rate_limit.remaining, Some(7));
        assert_eq!(rate_limit.link.as_deref(), Some("<prev>"));
    }

    #[test]
    fn test_partial_headers_overwrite_partially() {
        let mut rate_limit = RateLimit {
            limit: Some(20),
            remaining: Some(7),
            link: None,
        };
        let mut map = HeaderMap::new();
        map.insert(REMAINING_HEADER, HeaderValue::from_static("6"));
        rate_limit.update(&map);
        assert_eq!(rate_limit.limit, Some(20));
        assert_eq!(rate_limit.remaining, Some(6));
    }

    #[test]
    fn test_unparseable_count_ignored() {
        let mut rate_limit = RateLimit {
            limit: Some(20),
            ..RateLimit::default()
        };
        let mut map = HeaderMap::new();
        map.insert(LIMIT_HEADER, HeaderValue::from_static("not-a-number"));
        rate_limit.update(&map);
        assert_eq!(rate_limit.limit, Some(20));
    }
}
