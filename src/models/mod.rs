//! Typed records built from Giant Bomb JSON.
//!
//! Every record decodes through [`FromJson::from_json`], which returns `None`
//! for absent or empty input and otherwise never fails: missing keys and
//! wrong-typed values both leave the field as `None`.

pub(crate) mod de;
pub mod game;
pub mod platform;
pub mod search;
pub mod sub;

pub use game::*;
pub use platform::*;
pub use search::*;
pub use sub::*;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Construct a record from a loosely-typed JSON value.
pub trait FromJson: DeserializeOwned {
    /// `None` when `data` is null, `{}`, or not an object.
    fn from_json(data: &Value) -> Option<Self> {
        de::decode(data)
    }
}

/// Writes the `<id: name>` debug form shared by identifiable records.
pub(crate) fn display_record(
    f: &mut fmt::Formatter<'_>,
    id: Option<i64>,
    name: Option<&str>,
) -> fmt::Result {
    match id {
        Some(id) => write!(f, "<{}: {}>", id, name.unwrap_or("?")),
        None => write!(f, "<?: {}>", name.unwrap_or("?")),
    }
}
