//! HTTP transport for Giant Bomb API requests.
//!
//! The client builds a complete [`ApiRequest`] and hands it to a
//! [`Transport`], which performs the GET and returns the decoded JSON body.
//! [`HttpTransport`] is the `reqwest` implementation used by default.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::Result;

/// A fully-built GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Resource path relative to the base URL, e.g. `game/42/`.
    pub path: String,
    /// Absolute URL (`base_url + path`).
    pub url: String,
    /// Merged query parameters in send order.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Look up a query parameter by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Executes a GET and decodes the body as JSON.
///
/// Implementations must not interpret the envelope; that is the client's job.
pub trait Transport: Send + Sync {
    fn get(&self, request: &ApiRequest) -> Result<Value>;
}

/// Blocking `reqwest` transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &ApiRequest) -> Result<Value> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let resp = builder.send()?;
        log::debug!("GET {} -> {}", request.path, resp.status());
        Ok(resp.json()?)
    }
}
