use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{de, display_record, FromJson, Image};
use crate::identifier::HasId;

// ---------------------------------------------------------------------------
// SearchResult — lightweight projection returned by search and list calls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub api_detail_url: Option<String>,
    /// Raw image object as sent by the service.
    #[serde(default)]
    pub image: Option<Value>,
}

impl FromJson for SearchResult {}

impl SearchResult {
    /// Hydrate the raw `image` into an [`Image`].
    pub fn image_record(&self) -> Option<Image> {
        self.image.as_ref().and_then(Image::from_json)
    }
}

impl HasId for SearchResult {
    const KIND: &'static str = "search result";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_record(f, self.id, self.name.as_deref())
    }
}
