use crate::params::{JsonBody, QueryParams};
use crate::{Error, util::diagnostics};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug)]
pub struct RequestBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

impl RequestBody {
    #[must_use]
    pub fn json(value: &Value) -> Self {
        Self {
            bytes: value.to_string().into_bytes(),
            content_type: Some(HeaderValue::from_static("application/json")),
        }
    }
}

/// Where a request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Path segments appended (percent-encoded) to the client's base URL.
    Segments(Vec<String>),
    /// Caller-supplied path resolved against the base URL, escapes kept as given.
    Relative(String),
    /// Fully-qualified URL, used as-is.
    Absolute(Url),
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub target: Target,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    pub timeout_override: Option<Duration>,
}

impl Request {
    #[must_use]
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_target(
            method,
            Target::Segments(segments.into_iter().map(Into::into).collect()),
        )
    }

    #[must_use]
    pub fn with_target(method: Method, target: Target) -> Self {
        Self {
            method,
            target,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout_override: None,
        }
    }

    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    #[must_use]
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    #[must_use]
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    #[must_use]
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    #[must_use]
    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query(mut self, params: QueryParams) -> Self {
        self.query.extend(params.into_pairs());
        self
    }

    #[must_use]
    pub fn json(self, body: JsonBody) -> Self {
        self.body(RequestBody::json(&body.into_value()))
    }

    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Segments relative to the base URL, if this is not an absolute request.
    #[must_use]
    pub fn segments(&self) -> Option<&[String]> {
        match &self.target {
            Target::Segments(segments) => Some(segments),
            Target::Relative(_) | Target::Absolute(_) => None,
        }
    }

    /// Decoded JSON body, if one is attached.
    #[must_use]
    pub fn json_body(&self) -> Option<Value> {
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_slice(&body.bytes).ok())
    }
}

/// Raw HTTP response, returned whatever the status code.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    #[must_use]
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Request id echoed by the server, when present.
    #[must_use]
    pub fn request_id(&self) -> Option<Box<str>> {
        diagnostics::request_id(&self.headers)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            status: self.status,
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_sets_content_type() {
        let req = Request::post(["groups"]).json(JsonBody::new().field("name", "VIP"));
        let body = req.body.as_ref().unwrap();
        assert_eq!(body.content_type.as_ref().unwrap(), "application/json");
        assert_eq!(req.json_body(), Some(json!({ "name": "VIP" })));
    }

    #[test]
    fn response_json_reports_decode_errors() {
        let resp = Response {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            headers: HeaderMap::new(),
            body: b"not json".to_vec(),
        };
        let err = resp.json::<Value>().unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(!resp.is_success());
        assert_eq!(resp.text_lossy(), "not json");
    }
}
