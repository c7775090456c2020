//! HTTP transport layers.
//!
//! * `ReqwestAsync` / `UreqBlocking` respect the `no_proxy` flag to ignore
//!   system proxy environment variables (HTTP_PROXY, HTTPS_PROXY, etc.).
//! * Neither layer looks at the status code; every reply is handed back.

use http::{HeaderMap, HeaderValue, Method, StatusCode, header::CONTENT_TYPE};
use std::time::Duration;
use url::Url;

#[cfg(feature = "async")]
pub mod async_transport;
#[cfg(feature = "blocking")]
pub mod blocking_transport;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
pub mod request;

#[derive(Clone, Debug)]
pub struct TransportBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

/// A fully resolved request, ready for the wire.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    /// URL without query; query pairs are appended by the transport.
    pub url: Url,
    /// Resource family of `url`, used for span and metric labels.
    pub resource: &'static str,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<TransportBody>,
    pub timeout: Duration,
}

impl TransportRequest {
    /// Headers to put on the wire, with the body's content type taking precedence
    /// over any default `Content-Type`.
    pub(crate) fn wire_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        if let Some(content_type) = self.body.as_ref().and_then(|b| b.content_type.clone()) {
            headers.insert(CONTENT_TYPE, content_type);
        }
        headers
    }
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_content_type_replaces_default() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let req = TransportRequest {
            method: Method::POST,
            url: Url::parse("https://connect.mailerlite.com/api/groups").unwrap(),
            resource: "groups",
            headers,
            query: Vec::new(),
            body: Some(TransportBody {
                bytes: b"{}".to_vec(),
                content_type: Some(HeaderValue::from_static("application/json")),
            }),
            timeout: Duration::from_secs(1),
        };

        let wire = req.wire_headers();
        assert_eq!(wire.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(wire[CONTENT_TYPE], "application/json");
    }
}
