//! Ordered query-string parameter builder.
//!
//! Keys keep their first insertion position; setting an existing key replaces
//! its value in place. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use giantbomb_sdk::QueryParams;
//! let params = QueryParams::new()
//!     .set("resources", "game")
//!     .field_list(&["id", "name"])
//!     .offset(20)
//!     .build();
//! assert_eq!(params[1], ("field_list".to_string(), "id,name".to_string()));
//! ```

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{api_key, format=json}` set sent with every request.
    pub fn defaults(api_key: &str) -> Self {
        let mut params = Self::new();
        params.set("api_key", api_key).set("format", "json");
        params
    }

    /// Set `key` to `value`, replacing any earlier value for the same key.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Set `field_list` to the comma-joined field names.
    pub fn field_list(&mut self, fields: &[&str]) -> &mut Self {
        self.set("field_list", fields.join(","))
    }

    pub fn offset(&mut self, offset: u32) -> &mut Self {
        self.set("offset", offset)
    }

    /// Apply every pair of `other` on top of `self`; `other` wins on collision.
    pub fn merge(&mut self, other: &QueryParams) -> &mut Self {
        for (key, value) in &other.pairs {
            self.set(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn build(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}
