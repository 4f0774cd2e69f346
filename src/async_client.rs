//! Async wrapper around [`GiantBomb`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every call on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], since the underlying `reqwest` client is
//! the blocking one and must stay off the async event loop.
//!
//! # Example
//!
//! ```no_run
//! use giantbomb_sdk::AsyncGiantBomb;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let gb = AsyncGiantBomb::new("my-api-key", "my-app/1.0").await.unwrap();
//!
//!     let hits = gb.search("zelda", 0).await.unwrap();
//!
//!     // Any sync client method via closure
//!     let platforms = gb.run(|c| c.list_platforms(0)).await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{GiantBombError, Result};
use crate::models::{Game, Platform, SearchResult};
use crate::identifier::Identifier;
use crate::{GiantBomb, GiantBombBuilder};

/// Async wrapper around [`GiantBomb`].
///
/// The client is shared through an [`Arc`]; it holds no mutable state, so no
/// lock is needed.
pub struct AsyncGiantBomb {
    inner: Arc<GiantBomb>,
}

impl AsyncGiantBomb {
    /// Build the client on the blocking pool from a configured builder.
    ///
    /// The default transport creates a blocking `reqwest` client, which must
    /// not be constructed on the async event loop.
    pub async fn from_builder(builder: GiantBombBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let client = builder.build()?;
            Ok(AsyncGiantBomb {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| GiantBombError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Create a client with the default base URL and transport.
    pub async fn new(api_key: impl Into<String>, user_agent: impl Into<String>) -> Result<Self> {
        let builder = GiantBomb::builder().api_key(api_key).user_agent(user_agent);
        Self::from_builder(builder).await
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&GiantBomb) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| GiantBombError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn search(&self, query: &str, offset: u32) -> Result<Vec<SearchResult>> {
        let query = query.to_string();
        self.run(move |c| c.search(&query, offset)).await
    }

    pub async fn get_game(&self, game: impl Into<Identifier>) -> Result<Option<Game>> {
        let game = game.into();
        self.run(move |c| c.get_game(game)).await
    }

    pub async fn list_games(
        &self,
        platform: impl Into<Identifier>,
        offset: u32,
    ) -> Result<Vec<SearchResult>> {
        let platform = platform.into();
        self.run(move |c| c.list_games(platform, offset)).await
    }

    pub async fn get_platform(&self, platform: impl Into<Identifier>) -> Result<Option<Platform>> {
        let platform = platform.into();
        self.run(move |c| c.get_platform(platform)).await
    }

    pub async fn list_platforms(&self, offset: u32) -> Result<Vec<SearchResult>> {
        self.run(move |c| c.list_platforms(offset)).await
    }

    /// Release the client on the blocking pool.
    ///
    /// Dropping a blocking `reqwest` client from inside an async context can
    /// panic, so prefer this over a plain drop.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| GiantBombError::InvalidArgument(format!("Task join error: {e}")))
    }
}
