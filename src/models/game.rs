use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{de, display_record, Franchise, FromJson, Genre, Image, Platform, Video};
use crate::identifier::HasId;

// ---------------------------------------------------------------------------
// Game — full game detail
// ---------------------------------------------------------------------------

/// A game as returned by the `game/<id>/` endpoint.
///
/// The collection fields (`platforms`, `franchises`, `images`, `genres`,
/// `videos`) hold the raw sub-objects from the response. They are
/// `Some(vec![])` when the key is missing and `None` when the key holds
/// something other than an array. Use the `*_records` helpers to hydrate
/// them into typed records. `developers` and `publishers` are kept raw with
/// no shape check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub deck: Option<String>,
    #[serde(default = "de::empty_seq", deserialize_with = "de::seq_or_none")]
    pub platforms: Option<Vec<Value>>,
    /// Raw value as sent, whatever its shape.
    #[serde(default)]
    pub developers: Option<Value>,
    #[serde(default)]
    pub publishers: Option<Value>,
    #[serde(default = "de::empty_seq", deserialize_with = "de::seq_or_none")]
    pub franchises: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "de::record")]
    pub image: Option<Image>,
    #[serde(default = "de::empty_seq", deserialize_with = "de::seq_or_none")]
    pub images: Option<Vec<Value>>,
    #[serde(default = "de::empty_seq", deserialize_with = "de::seq_or_none")]
    pub genres: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub original_release_date: Option<String>,
    #[serde(default = "de::empty_seq", deserialize_with = "de::seq_or_none")]
    pub videos: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub api_detail_url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub site_detail_url: Option<String>,
    #[serde(rename = "date_added", default, deserialize_with = "de::lenient")]
    pub date_added_gb: Option<String>,
    #[serde(rename = "date_last_updated", default, deserialize_with = "de::lenient")]
    pub date_last_updated_gb: Option<String>,
}

impl FromJson for Game {}

impl Game {
    pub fn platform_records(&self) -> Vec<Platform> {
        de::hydrate(self.platforms.as_ref())
    }

    pub fn franchise_records(&self) -> Vec<Franchise> {
        de::hydrate(self.franchises.as_ref())
    }

    pub fn genre_records(&self) -> Vec<Genre> {
        de::hydrate(self.genres.as_ref())
    }

    pub fn video_records(&self) -> Vec<Video> {
        de::hydrate(self.videos.as_ref())
    }

    /// Gallery images; items use the same `*_url` keys as [`Image`].
    pub fn image_records(&self) -> Vec<Image> {
        de::hydrate(self.images.as_ref())
    }
}

impl HasId for Game {
    const KIND: &'static str = "game";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_record(f, self.id, self.name.as_deref())
    }
}
