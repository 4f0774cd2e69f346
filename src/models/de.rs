//! Lenient field decoders shared by all records.
//!
//! None of these fail on a well-formed JSON value: a wrong-typed field
//! becomes `None` instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::FromJson;

/// Decode a record from a JSON object; anything else, or `{}`, is `None`.
pub(crate) fn decode<T: DeserializeOwned>(data: &Value) -> Option<T> {
    match data {
        Value::Object(map) if !map.is_empty() => serde_json::from_value(data.clone()).ok(),
        _ => None,
    }
}

/// Scalar field: keep it if it has the expected type, otherwise `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(&value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            log::debug!("dropping malformed field value {}: {}", value, e);
            Ok(None)
        }
    }
}

/// Nested record field, built through the record's own constructor.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromJson,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::from_json(&value))
}

/// Collection field: a JSON array passes through raw, any other value is `None`.
pub(crate) fn seq_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(items)),
        _ => Ok(None),
    }
}

/// Default for a collection key that is missing entirely.
pub(crate) fn empty_seq() -> Option<Vec<Value>> {
    Some(Vec::new())
}

/// Hydrate raw collection items, dropping the ones that decode to nothing.
pub(crate) fn hydrate<T: FromJson>(items: Option<&Vec<Value>>) -> Vec<T> {
    items
        .map(|items| items.iter().filter_map(T::from_json).collect())
        .unwrap_or_default()
}
