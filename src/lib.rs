//! Giant Bomb SDK for Rust.
//!
//! Provides a blocking client for the Giant Bomb video-game metadata API.
//! Each call sends one authenticated GET, checks the response envelope, and
//! maps the payload into typed records (games, platforms, search results).
//!
//! # Quick start
//!
//! ```no_run
//! use giantbomb_sdk::GiantBomb;
//!
//! let gb = GiantBomb::new("my-api-key", "my-app/1.0").unwrap();
//!
//! let hits = gb.search("metroid", 0).unwrap();
//! if let Some(game) = gb.get_game(&hits[0]).unwrap() {
//!     println!("{} ({} genres)", game, game.genre_records().len());
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod identifier;
pub mod models;
pub mod params;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncGiantBomb;
pub use error::{GiantBombError, Result};
pub use identifier::{HasId, Identifier};
pub use models::{FromJson, Franchise, Game, Genre, Image, Platform, SearchResult, Video};
pub use params::QueryParams;
pub use transport::{ApiRequest, HttpTransport, Transport};

use serde_json::Value;
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// GiantBombBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`GiantBomb`] client.
///
/// Use [`GiantBomb::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](GiantBombBuilder::build) to create the client.
pub struct GiantBombBuilder {
    api_key: Option<String>,
    user_agent: Option<String>,
    base_url: String,
    timeout: Duration,
    transport: Option<Box<dyn Transport>>,
}

impl Default for GiantBombBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            user_agent: None,
            base_url: config::BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl GiantBombBuilder {
    /// Seed the API key and user agent from the environment.
    ///
    /// Reads `GIANTBOMB_API_KEY` and `GIANTBOMB_USER_AGENT`; the user agent
    /// falls back to `giantbomb-sdk/<version>`. Values set afterwards on the
    /// builder take precedence.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        builder.api_key = std::env::var(config::API_KEY_ENV).ok();
        builder.user_agent = Some(
            std::env::var(config::USER_AGENT_ENV).unwrap_or_else(|_| config::default_user_agent()),
        );
        builder
    }

    /// Set the API key sent as `api_key` on every request. Required.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the `User-Agent` header. Required; Giant Bomb rejects generic agents.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the API root. Defaults to `https://giantbomb.com/api/`.
    ///
    /// A trailing slash is added if missing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom [`Transport`] instead of the default `reqwest` one.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client.
    ///
    /// Fails if the API key or user agent is missing or blank, or if the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<GiantBomb> {
        let api_key = require(self.api_key, "API key")?;
        let user_agent = require(self.user_agent, "user agent")?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(self.timeout)?),
        };
        Ok(GiantBomb {
            api_key,
            user_agent,
            base_url: self.base_url,
            transport,
        })
    }
}

fn require(value: Option<String>, what: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GiantBombError::InvalidArgument(format!("{} is required", what))),
    }
}

// ---------------------------------------------------------------------------
// GiantBomb
// ---------------------------------------------------------------------------

/// Blocking client for the Giant Bomb API.
///
/// Holds the credentials and the transport; no other state is kept between
/// calls, so a client can be shared across threads.
pub struct GiantBomb {
    api_key: String,
    user_agent: String,
    base_url: String,
    transport: Box<dyn Transport>,
}

impl GiantBomb {
    /// Create a new builder for configuring the client.
    pub fn builder() -> GiantBombBuilder {
        GiantBombBuilder::default()
    }

    /// Create a client with the default base URL and transport.
    pub fn new(api_key: impl Into<String>, user_agent: impl Into<String>) -> Result<Self> {
        Self::builder()
            .api_key(api_key)
            .user_agent(user_agent)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    // -- Operations --------------------------------------------------------

    /// Search games by name.
    pub fn search(&self, query: &str, offset: u32) -> Result<Vec<SearchResult>> {
        let mut params = QueryParams::new();
        params
            .set("resources", "game")
            .set("query", query)
            .field_list(config::SEARCH_FIELDS)
            .offset(offset);
        let results = self.request("search/", &params)?;
        search_results(results)
    }

    /// Fetch full detail for one game.
    ///
    /// Returns `Ok(None)` when the service answers with empty results.
    pub fn get_game(&self, game: impl Into<Identifier>) -> Result<Option<Game>> {
        let id = game.into().resolve()?;
        let mut params = QueryParams::new();
        params.field_list(config::GAME_FIELDS);
        let results = self.request(&config::game_path(id), &params)?;
        Ok(Game::from_json(&results))
    }

    /// List games released on a platform.
    pub fn list_games(
        &self,
        platform: impl Into<Identifier>,
        offset: u32,
    ) -> Result<Vec<SearchResult>> {
        let platform = platform.into().resolve()?;
        let mut params = QueryParams::new();
        params
            .set("platforms", platform)
            .field_list(config::GAME_LIST_FIELDS)
            .offset(offset);
        let results = self.request("games/", &params)?;
        search_results(results)
    }

    /// Fetch detail for one platform.
    pub fn get_platform(&self, platform: impl Into<Identifier>) -> Result<Option<Platform>> {
        let id = platform.into().resolve()?;
        let mut params = QueryParams::new();
        params.field_list(config::PLATFORM_FIELDS);
        let results = self.request(&config::platform_path(id), &params)?;
        Ok(Platform::from_json(&results))
    }

    /// List all platforms, one page at a time.
    pub fn list_platforms(&self, offset: u32) -> Result<Vec<SearchResult>> {
        let mut params = QueryParams::new();
        params
            .field_list(config::PLATFORM_LIST_FIELDS)
            .offset(offset);
        let results = self.request("platforms/", &params)?;
        search_results(results)
    }

    /// Send a GET to `path` and return the validated `results` payload.
    ///
    /// `params` are applied on top of `{api_key, format=json}`, so they win
    /// on key collision. Useful for endpoints not wrapped by this client.
    pub fn request(&self, path: &str, params: &QueryParams) -> Result<Value> {
        let request = self.build_request(path, params);
        let body = self.transport.get(&request)?;
        envelope::validate_response(body)
    }

    fn build_request(&self, path: &str, params: &QueryParams) -> ApiRequest {
        let mut query = QueryParams::defaults(&self.api_key);
        query.merge(params);
        ApiRequest {
            path: path.to_string(),
            url: format!("{}{}", self.base_url, path),
            query: query.build(),
            headers: vec![("User-Agent".to_string(), self.user_agent.clone())],
        }
    }
}

/// Map a list payload through [`SearchResult::from_json`], skipping empty items.
fn search_results(results: Value) -> Result<Vec<SearchResult>> {
    let items = match results {
        Value::Array(items) => items,
        other => {
            return Err(GiantBombError::UnexpectedPayload(format!(
                "expected a results list, got {}",
                json_kind(&other)
            )))
        }
    };
    let total = items.len();
    let mapped: Vec<SearchResult> = items.iter().filter_map(SearchResult::from_json).collect();
    if mapped.len() < total {
        log::warn!("skipped {} empty result item(s)", total - mapped.len());
    }
    Ok(mapped)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for GiantBomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GiantBomb(base_url={}, user_agent={})",
            self.base_url, self.user_agent
        )
    }
}
