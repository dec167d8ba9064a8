use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::{StatusCode, Url};

use super::RateLimitUsage;

// -------------------------------------------------------------------------------------------------
// Error
// -------------------------------------------------------------------------------------------------
#[derive(Debug)]
pub enum Error {
    /// The server answered with a 4xx or 5xx status
    HttpStatus {
        /// The URL that was requested
        url: Url,

        /// The response status
        status: StatusCode,

        /// The response headers
        headers: HeaderMap,

        /// Rate limit usage, present only for 403 responses that report it
        rate_limit: Option<RateLimitUsage>,
    },
    /// Connecting, sending the request, or reading the response failed
    Transport(reqwest::Error),
    /// The response body could not be decoded as the expected JSON
    Decode(serde_json::Error),
    UrlParseError(url::ParseError),
    UrlSlashError(String),
    /// A URL path component was empty, `.`, or `..`
    UrlPathError(String),
    UrlBaseError(Url),
    InvalidTokenEnvVar(String),
    InvalidHeaderValue(InvalidHeaderValue),
}

impl Error {
    /// The HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// The rate limit usage reported by a forbidden response, if any.
    pub fn rate_limit(&self) -> Option<&RateLimitUsage> {
        match self {
            Error::HttpStatus { rate_limit, .. } => rate_limit.as_ref(),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit().is_some()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::HttpStatus{url, status, rate_limit: Some(usage), ..} => write!(f, "request to {url} failed with HTTP status {status}: rate limit exceeded ({usage})"),
            Error::HttpStatus{url, status, rate_limit: None, ..} => write!(f, "request to {url} failed with HTTP status {status}"),
            Error::Transport(e) => write!(f, "error making request: {e}"),
            Error::Decode(e) => write!(f, "error decoding JSON response: {e}"),
            Error::UrlParseError(e) => write!(f, "error parsing URL: {e}"),
            Error::UrlSlashError(p) => write!(f, "error building URL: component {p:?} contains a slash"),
            Error::UrlPathError(p) => write!(f, "error building URL: invalid path component {p:?}"),
            Error::UrlBaseError(u) => write!(f, "error building URL: {u} cannot be used as an API base URL"),
            Error::InvalidTokenEnvVar(v) => write!(f, "error loading token: ill-formed value of {v} environment variable"),
            Error::InvalidHeaderValue(e) => write!(f, "error building request header: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::HttpStatus{..} => None,
            Error::Transport(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::UrlParseError(e) => Some(e),
            Error::UrlSlashError(_) => None,
            Error::UrlPathError(_) => None,
            Error::UrlBaseError(_) => None,
            Error::InvalidTokenEnvVar(_) => None,
            Error::InvalidHeaderValue(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::UrlParseError(e)
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Self {
        Error::InvalidHeaderValue(e)
    }
}
