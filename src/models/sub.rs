use serde::{Deserialize, Serialize};
use std::fmt;

use super::{de, display_record, FromJson};
use crate::identifier::HasId;

// ---------------------------------------------------------------------------
// Image — URL set for one picture at several sizes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "icon_url", default, deserialize_with = "de::lenient")]
    pub icon: Option<String>,
    #[serde(rename = "medium_url", default, deserialize_with = "de::lenient")]
    pub medium: Option<String>,
    #[serde(rename = "tiny_url", default, deserialize_with = "de::lenient")]
    pub tiny: Option<String>,
    #[serde(rename = "small_url", default, deserialize_with = "de::lenient")]
    pub small: Option<String>,
    #[serde(rename = "thumb_url", default, deserialize_with = "de::lenient")]
    pub thumb: Option<String>,
    #[serde(rename = "screen_url", default, deserialize_with = "de::lenient")]
    pub screen: Option<String>,
    /// `super` is reserved, so this one keeps the source key name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub super_url: Option<String>,
}

impl FromJson for Image {}

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub api_detail_url: Option<String>,
}

impl FromJson for Genre {}

impl HasId for Genre {
    const KIND: &'static str = "genre";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_record(f, self.id, self.name.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Franchise
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub deck: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub api_detail_url: Option<String>,
    #[serde(default, deserialize_with = "de::record")]
    pub image: Option<Image>,
}

impl FromJson for Franchise {}

impl HasId for Franchise {
    const KIND: &'static str = "franchise";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Franchise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_record(f, self.id, self.name.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Video — game videos; `site_detail_url` is only present on some payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub deck: Option<String>,
    #[serde(default, deserialize_with = "de::record")]
    pub image: Option<Image>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub publish_date: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub site_detail_url: Option<String>,
}

impl FromJson for Video {}

impl HasId for Video {
    const KIND: &'static str = "video";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_record(f, self.id, self.name.as_deref())
    }
}
