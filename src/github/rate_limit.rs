use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;

// -------------------------------------------------------------------------------------------------
// RateLimitUsage
// -------------------------------------------------------------------------------------------------
/// Rate limit usage as reported by GitHub in response headers.
///
/// Instead of using an HTTP 429 response code, GitHub answers a rate-limited request with 403 and
/// describes the current window in the `x-ratelimit-*` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitUsage {
    /// The value of the `x-ratelimit-used` header
    pub used: String,

    /// The value of the `x-ratelimit-limit` header
    pub limit: String,

    /// When the current rate limit window resets, from the `x-ratelimit-reset` header
    pub reset: Option<DateTime<Utc>>,
}

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const USED_HEADER: &str = "x-ratelimit-used";
const RESET_HEADER: &str = "x-ratelimit-reset";

impl RateLimitUsage {
    /// Extract rate limit usage from the given headers.
    ///
    /// Returns `None` unless both the limit and the used count are present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_string(headers.get(LIMIT_HEADER)?);
        let used = header_string(headers.get(USED_HEADER)?);

        // The reset header is an integer representing UTC epoch seconds.
        let reset = headers
            .get(RESET_HEADER)
            .and_then(|v| atoi::atoi::<i64>(v.as_bytes()))
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

        Some(RateLimitUsage { used, limit, reset })
    }

    /// Extract rate limit usage from a response, but only when it is a 403.
    pub(super) fn from_forbidden(status: StatusCode, headers: &HeaderMap) -> Option<Self> {
        if status == StatusCode::FORBIDDEN {
            Self::from_headers(headers)
        } else {
            None
        }
    }
}

fn header_string(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

impl std::fmt::Display for RateLimitUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.used, self.limit)
    }
}
