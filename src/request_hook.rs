//! Caller hook run on every outgoing request, after auth and default headers.

use crate::Error;
use crate::transport::TransportRequest;
use http::{HeaderMap, HeaderValue, Method};
use std::sync::Arc;
use url::Url;

/// What a request hook sees of a request about to be sent.
///
/// Only the headers are mutable. Returning an error from the hook aborts the
/// request with that error.
pub struct RequestHookContext<'a> {
    pub method: &'a Method,
    /// Resource family (`subscribers`, `campaigns`, ...), or `other`.
    pub resource: &'static str,
    /// URL without query.
    pub url: &'a Url,
    /// Headers as they will be sent, including `Authorization`.
    pub headers: &'a mut HeaderMap,
    pub query: &'a [(String, String)],
    /// Serialized JSON body, if any.
    pub body: Option<&'a [u8]>,
    pub content_type: Option<&'a HeaderValue>,
}

pub type RequestHook =
    Arc<dyn for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static>;

pub(crate) fn run(hook: &RequestHook, req: &mut TransportRequest) -> Result<(), Error> {
    let body = req.body.as_ref();

    hook(RequestHookContext {
        method: &req.method,
        resource: req.resource,
        url: &req.url,
        headers: &mut req.headers,
        query: &req.query,
        body: body.map(|b| b.bytes.as_slice()),
        content_type: body.and_then(|b| b.content_type.as_ref()),
    })
}
