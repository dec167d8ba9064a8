use reqwest::blocking::Response;
use reqwest::header::{self, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::request::append_query_params;
use super::{
    Auth, ClientBuilder, Error, FetchRequest, JsonObject, RateLimitUsage, Result, GITHUB_V3_JSON,
};

// -------------------------------------------------------------------------------------------------
// Client
// -------------------------------------------------------------------------------------------------
/// A blocking client for the GitHub REST API.
///
/// Each call makes exactly one request: there are no retries and no pagination.
pub struct Client {
    pub(super) base_url: Url,
    pub(super) inner: reqwest::blocking::Client,
    pub(super) auth: Auth,
}

impl Client {
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        match self.auth {
            Auth::Unauthenticated => false,
            Auth::PersonalAccessToken(_) => true,
        }
    }

    /// Make a single request and decode the successful response with `reader`.
    ///
    /// If this client has a token, it is sent only when the request URL has the same origin as
    /// the base URL. Responses with a 4xx or 5xx status are returned as `Error::HttpStatus`
    /// without invoking `reader`.
    pub fn fetch<T, F>(&self, request: FetchRequest, reader: F) -> Result<T>
    where
        F: FnOnce(Response) -> Result<T>,
    {
        let method = request.effective_method();
        let FetchRequest {
            url,
            mut headers,
            body,
            ..
        } = request;

        if self.should_authenticate(&url) {
            if let Some(value) = self.auth.header_value() {
                let mut value = HeaderValue::from_str(&value)?;
                value.set_sensitive(true);
                headers.insert(header::AUTHORIZATION, value);
            }
        }

        debug!("{method} {url}");
        let mut request_builder = self.inner.request(method, url.clone()).headers(headers);
        if let Some(body) = &body {
            request_builder = request_builder.json(body);
        }

        // send request and wait for response
        let response = request_builder.send()?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let headers = response.headers().clone();
            let rate_limit = RateLimitUsage::from_forbidden(status, &headers);
            if let Some(usage) = &rate_limit {
                match usage.reset {
                    Some(reset) => warn!("Rate limit exceeded: {usage} (resets at {reset})"),
                    None => warn!("Rate limit exceeded: {usage}"),
                }
            }
            return Err(Error::HttpStatus {
                url,
                status,
                headers,
                rate_limit,
            });
        }

        reader(response)
    }

    /// Make a single request and return the raw response body.
    pub fn fetch_url(&self, request: FetchRequest) -> Result<Vec<u8>> {
        self.fetch(request, read_body)
    }

    /// Make a single request for JSON from the given URL and decode it as a `T`.
    ///
    /// Any `params` are appended to the URL as a query string. If `data` is given, it is sent as
    /// the JSON request body, and the request is a `POST`.
    pub fn fetch_json_as<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        data: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = append_query_params(url, params);
        let mut request = FetchRequest::parse(&url)?
            .header(header::ACCEPT, HeaderValue::from_static(GITHUB_V3_JSON));
        if let Some(data) = data {
            request = request.json_body(data);
        }
        self.fetch(request, |response| {
            let body = read_body(response)?;
            Ok(serde_json::from_slice(&body)?)
        })
    }

    /// Fetch a JSON array of objects.
    pub fn fetch_json(
        &self,
        url: &str,
        params: &[(&str, &str)],
        data: Option<serde_json::Value>,
    ) -> Result<Vec<JsonObject>> {
        self.fetch_json_as(url, params, data)
    }

    /// Fetch a single JSON object.
    pub fn fetch_json_dict(
        &self,
        url: &str,
        params: &[(&str, &str)],
        data: Option<serde_json::Value>,
    ) -> Result<JsonObject> {
        self.fetch_json_as(url, params, data)
    }
}

fn read_body(response: Response) -> Result<Vec<u8>> {
    Ok(response.bytes()?.to_vec())
}

/// Create a URL from the given base and path parts.
///
/// Each path part becomes exactly one path segment under the base URL's path, with any URL
/// metacharacters in it percent-encoded. Parts that contain slashes or that are empty, `.`, or
/// `..` are rejected.
fn url_from_path_parts(base_url: Url, path_parts: &[&str]) -> Result<Url> {
    for p in path_parts {
        if p.contains('/') {
            return Err(Error::UrlSlashError(p.to_string()));
        }
        if matches!(*p, "" | "." | "..") {
            return Err(Error::UrlPathError(p.to_string()));
        }
    }

    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| Error::UrlBaseError(base_url))?
        .pop_if_empty()
        .extend(path_parts);
    Ok(url)
}


// private implementation
impl Client {
    /// Construct a `Url` under the base URL from the given path parts.
    pub(super) fn make_url(&self, path_parts: &[&str]) -> Result<Url> {
        url_from_path_parts(self.base_url.clone(), path_parts)
    }

    /// Whether credentials may be sent to the given URL.
    fn should_authenticate(&self, url: &Url) -> bool {
        url.origin() == self.base_url.origin()
    }
}
