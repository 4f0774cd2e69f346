//! Shared test fixtures for the Giant Bomb SDK integration tests.
//!
//! Provides `MockTransport`, which records every request the client builds
//! and answers with a canned JSON body, plus a few sample payloads.

#![allow(dead_code)]

use giantbomb_sdk::{ApiRequest, GiantBomb, Result, Transport};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Records requests and replies with a fixed body.
#[derive(Clone)]
pub struct MockTransport {
    body: Value,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn get(&self, request: &ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.body.clone())
    }
}

/// Build a client wired to a mock answering `{status_code: 1, results}`.
///
/// Returns the client and a handle to the mock for inspecting requests.
pub fn client_with_results(results: Value) -> (GiantBomb, MockTransport) {
    client_with_body(json!({ "status_code": 1, "error": "OK", "results": results }))
}

pub fn client_with_body(body: Value) -> (GiantBomb, MockTransport) {
    let mock = MockTransport::new(body);
    let client = GiantBomb::builder()
        .api_key("test-key")
        .user_agent("giantbomb-sdk-tests")
        .transport(mock.clone())
        .build()
        .unwrap();
    (client, mock)
}

pub fn sample_image() -> Value {
    json!({
        "icon_url": "https://example.test/icon.png",
        "medium_url": "https://example.test/medium.png",
        "tiny_url": "https://example.test/tiny.png",
        "small_url": "https://example.test/small.png",
        "thumb_url": "https://example.test/thumb.png",
        "screen_url": "https://example.test/screen.png",
        "super_url": "https://example.test/super.png"
    })
}

pub fn sample_game() -> Value {
    json!({
        "id": 21170,
        "name": "Portal 2",
        "deck": "Chell wakes up again.",
        "image": sample_image(),
        "genres": [
            { "id": 1, "name": "Action", "api_detail_url": "https://example.test/genre/1/" },
            { "id": 2, "name": "Puzzle", "api_detail_url": "https://example.test/genre/2/" }
        ],
        "platforms": [
            { "id": 94, "name": "PC", "abbreviation": "PC" },
            { "id": 20, "name": "Xbox 360", "abbreviation": "X360" }
        ],
        "developers": [ { "id": 1, "name": "Valve" } ],
        "original_release_date": "2011-04-19",
        "api_detail_url": "https://example.test/game/21170/",
        "site_detail_url": "https://example.test/portal-2/",
        "date_added": "2009-03-05 12:00:00",
        "date_last_updated": "2020-01-01 00:00:00"
    })
}
