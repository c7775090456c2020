//! Parameter bags that drop absent and empty values before serialization.
//!
//! A value counts as empty when it is `None`/`null`, a string that is blank after
//! trimming, an empty list, or an empty map. `false` and `0` are real values and
//! are always kept.

use serde_json::{Map, Value};
use std::fmt::Display;

pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Query-string pairs for `GET` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` unless `value` is absent or blank.
    #[must_use]
    pub fn opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.trim().is_empty() {
                self.0.push((key.into(), value));
            }
        }
        self
    }

    #[must_use]
    pub fn pair<V: Display>(self, key: impl Into<String>, value: V) -> Self {
        self.opt(key, Some(value))
    }

    /// Add `filter[name]=value` unless `value` is absent or blank.
    #[must_use]
    pub fn filter<V: Display>(self, name: &str, value: Option<V>) -> Self {
        self.opt(format!("filter[{name}]"), value)
    }

    /// Add one `filter[...]` pair per entry of a filter mapping.
    #[must_use]
    pub fn filters<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        entries
            .into_iter()
            .fold(self, |acc, (name, value)| acc.filter(name.as_ref(), Some(value)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

/// JSON object for `POST`/`PUT` bodies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` unless `value` is absent or empty.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !is_blank(&value) {
            self.0.insert(key.into(), value);
        }
        self
    }

    /// Set `key` to a nested object unless it ended up empty.
    #[must_use]
    pub fn object(self, key: impl Into<String>, nested: JsonBody) -> Self {
        self.field(key, nested.into_value())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Convert a list of serialisable ids into a JSON array.
pub(crate) fn string_list<T: AsRef<str>>(items: &[T]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| Value::String(item.as_ref().to_owned()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_drops_absent_and_blank_values() {
        let query = QueryParams::new()
            .filter("status", Some("active"))
            .opt("limit", None::<u32>)
            .opt("page", Some(2))
            .opt("sort", Some("  "));

        assert_eq!(
            query.pairs(),
            &[
                ("filter[status]".to_owned(), "active".to_owned()),
                ("page".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn query_keeps_zero() {
        let query = QueryParams::new().pair("limit", 0);
        assert_eq!(query.get("limit"), Some("0"));
    }

    #[test]
    fn filter_mapping_survives_url_encoding() {
        let query = QueryParams::new().filters([("status", "active"), ("name", "Q&A news")]);

        let mut url = url::Url::parse("https://connect.mailerlite.com/api/groups").unwrap();
        url.query_pairs_mut().extend_pairs(query.pairs());
        let decoded: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(decoded, query.into_pairs());
    }

    #[test]
    fn json_body_drops_empty_values() {
        let body = JsonBody::new()
            .field("email", "user@example.com")
            .field("status", None::<String>)
            .field("groups", Vec::<Value>::new())
            .field("fields", Map::new())
            .field("ip_address", "")
            .field("enabled", false)
            .field("language_id", 0);

        assert_eq!(
            body.into_value(),
            json!({ "email": "user@example.com", "enabled": false, "language_id": 0 })
        );
    }

    #[test]
    fn empty_nested_object_is_dropped() {
        let body = JsonBody::new()
            .object("schedule", JsonBody::new().field("hours", None::<String>))
            .object("resend", JsonBody::new().field("hours", "10"));
        assert_eq!(body.into_value(), json!({ "resend": { "hours": "10" } }));
    }

    #[test]
    fn field_is_written_once() {
        let body = JsonBody::new().field("name", "a").field("name", "b");
        assert_eq!(body.into_value(), json!({ "name": "b" }));
    }
}
