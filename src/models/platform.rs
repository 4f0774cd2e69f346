use serde::{Deserialize, Serialize};
use std::fmt;

use super::{de, display_record, FromJson, Image};
use crate::identifier::HasId;

// ---------------------------------------------------------------------------
// Platform — a console, handheld, or computer platform
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub deck: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub api_detail_url: Option<String>,
    #[serde(default, deserialize_with = "de::record")]
    pub image: Option<Image>,
}

impl FromJson for Platform {}

impl HasId for Platform {
    const KIND: &'static str = "platform";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_record(f, self.id, self.name.as_deref())
    }
}
