use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use super::Result;

// -------------------------------------------------------------------------------------------------
// FetchRequest
// -------------------------------------------------------------------------------------------------
/// A description of a single request to be made by [`Client::fetch`](super::Client::fetch).
///
/// Every field besides the URL is optional:
///
/// - `headers`: empty by default; merged into the outgoing request
/// - `body`: none by default; when present, sent as JSON
/// - `method`: `GET` by default, or `POST` when a body is present
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub(super) url: Url,
    pub(super) headers: HeaderMap,
    pub(super) body: Option<serde_json::Value>,
    pub(super) method: Option<Method>,
}

impl FetchRequest {
    pub fn new(url: Url) -> Self {
        FetchRequest {
            url,
            headers: HeaderMap::new(),
            body: None,
            method: None,
        }
    }

    /// Create a request for the given URL string.
    pub fn parse(url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Set a single header, replacing any previous value for that name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge the given headers into this request.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Send the given value as a JSON request body.
    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The method that will be used: the override if one was given, otherwise `POST` when there
    /// is a body and `GET` when there is not.
    pub fn effective_method(&self) -> Method {
        match (&self.method, &self.body) {
            (Some(method), _) => method.clone(),
            (None, Some(_)) => Method::POST,
            (None, None) => Method::GET,
        }
    }
}

/// Characters left alone when encoding query parameters: alphanumerics, `-._~`, and `/`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Append `?name=value&...` to the given URL, percent-encoding each name and value.
///
/// Parameters are written in the given order. With no parameters the URL is returned unchanged.
pub fn append_query_params(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(name, QUERY_VALUE),
                utf8_percent_encode(value, QUERY_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}
