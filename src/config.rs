use std::time::Duration;

pub const BASE_URL: &str = "https://giantbomb.com/api/";

pub const API_KEY_ENV: &str = "GIANTBOMB_API_KEY";
pub const USER_AGENT_ENV: &str = "GIANTBOMB_USER_AGENT";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The only `status_code` the service uses for success.
pub const STATUS_OK: i64 = 1;

// Field lists sent as `field_list`, one per operation.
pub const SEARCH_FIELDS: &[&str] = &["id", "name", "image"];

pub const GAME_FIELDS: &[&str] = &[
    "id",
    "name",
    "deck",
    "publishers",
    "developers",
    "franchises",
    "image",
    "images",
    "genres",
    "original_release_date",
    "platforms",
    "videos",
    "api_detail_url",
    "site_detail_url",
    "date_added",
    "date_last_updated",
];

pub const GAME_LIST_FIELDS: &[&str] = &["id", "name", "image"];

pub const PLATFORM_FIELDS: &[&str] = &[
    "id",
    "name",
    "abbreviation",
    "deck",
    "api_detail_url",
    "image",
];

pub const PLATFORM_LIST_FIELDS: &[&str] = &["id", "name", "abbreviation", "deck"];

pub fn default_user_agent() -> String {
    format!("giantbomb-sdk/{}", env!("CARGO_PKG_VERSION"))
}

pub fn game_path(id: i64) -> String {
    format!("game/{}/", id)
}

pub fn platform_path(id: i64) -> String {
    format!("platform/{}/", id)
}
