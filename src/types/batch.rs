//! Batch request items.

use crate::params::JsonBody;
use http::Method;
use serde_json::Value;

/// One request inside `POST /batch`.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRequest {
    pub method: Method,
    /// Path including the `api/` prefix, e.g. `api/subscribers`.
    pub path: String,
    pub body: Option<Value>,
}

impl BatchRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn to_value(&self) -> Value {
        JsonBody::new()
            .field("method", self.method.as_str())
            .field("path", self.path.as_str())
            .field("body", self.body.clone())
            .into_value()
    }
}

pub(crate) fn batch_body(requests: &[BatchRequest]) -> JsonBody {
    JsonBody::new().field(
        "requests",
        Value::Array(requests.iter().map(BatchRequest::to_value).collect()),
    )
}
