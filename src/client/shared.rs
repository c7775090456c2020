//! Pieces shared by the async and blocking clients.

use crate::{
    ApiToken, Error, RequestHook,
    transport::{
        TransportBody, TransportRequest, TransportResponse,
        request::{Request, Response},
    },
    util::url::{normalize_base_url, resource_of, target_url},
};
use http::{
    HeaderMap, HeaderValue,
    header::{ACCEPT, CONTENT_TYPE},
};
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::field;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://connect.mailerlite.com/api";
/// Environment variable holding the API token.
pub const API_TOKEN_ENV: &str = "MAILERLITE_API_TOKEN";
/// Optional environment variable overriding [`DEFAULT_BASE_URL`].
pub const API_URL_ENV: &str = "MAILERLITE_API_URL";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) token: ApiToken,
    pub(crate) insecure: bool,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) connect_timeout: Duration,
    pub(crate) read_timeout: Duration,
    pub(crate) no_proxy: bool,
    pub(crate) default_headers: HeaderMap,
    pub(crate) request_hook: Option<RequestHook>,
}

impl ClientConfig {
    pub(crate) fn new(token: ApiToken) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(30),
            no_proxy: false,
            default_headers,
            request_hook: None,
        }
    }

    /// Token from `MAILERLITE_API_TOKEN`, base URL from `MAILERLITE_API_URL` if set.
    pub(crate) fn from_env() -> Result<Self, Error> {
        let token = env_opt(API_TOKEN_ENV).ok_or_else(|| {
            Error::invalid_config(format!("environment variable {API_TOKEN_ENV} is not set"))
        })?;
        let mut config = Self::new(ApiToken::new(token));
        if let Some(base_url) = env_opt(API_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub(crate) fn into_core(self) -> Result<(ClientCore, TransportSettings), Error> {
        let base = normalize_base_url(&self.base_url)?;
        let core = ClientCore {
            base,
            token: self.token,
            timeout: self.timeout,
            default_headers: self.default_headers,
            request_hook: self.request_hook,
        };
        let settings = TransportSettings {
            insecure: self.insecure,
            user_agent: self.user_agent,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            no_proxy: self.no_proxy,
        };
        Ok((core, settings))
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) struct TransportSettings {
    pub(crate) insecure: bool,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) connect_timeout: Duration,
    pub(crate) read_timeout: Duration,
    pub(crate) no_proxy: bool,
}

/// Immutable per-client state used to turn a [`Request`] into a [`TransportRequest`].
pub(crate) struct ClientCore {
    base: Url,
    token: ApiToken,
    timeout: Duration,
    default_headers: HeaderMap,
    request_hook: Option<RequestHook>,
}

impl ClientCore {
    pub(crate) fn base_url(&self) -> &Url {
        &self.base
    }

    pub(crate) fn prepare(&self, req: &Request) -> Result<TransportRequest, Error> {
        let url = target_url(&self.base, &req.target)?;

        let mut headers = self.default_headers.clone();
        self.token.apply(&mut headers)?;
        headers.extend(req.headers.clone());

        let body = req.body.clone().map(|body| TransportBody {
            bytes: body.bytes,
            content_type: body.content_type,
        });

        Ok(TransportRequest {
            method: req.method.clone(),
            resource: resource_of(&self.base, &url),
            url,
            headers,
            query: req.query.clone(),
            body,
            timeout: req.timeout_override.unwrap_or(self.timeout),
        })
    }

    /// Run the configured request hook, if any, on a prepared request.
    pub(crate) fn run_hook(&self, req: &mut TransportRequest) -> Result<(), Error> {
        match &self.request_hook {
            Some(hook) => crate::request_hook::run(hook, req),
            None => Ok(()),
        }
    }
}

/// Tracing span and metrics bookkeeping for a single request.
pub(crate) struct RequestObserver {
    #[cfg(feature = "metrics")]
    labels: crate::transport::metrics::RequestLabels,
    #[cfg(any(feature = "tracing", feature = "metrics"))]
    start: std::time::Instant,
    #[cfg(feature = "tracing")]
    span: tracing::Span,
    #[cfg(feature = "metrics")]
    _inflight: crate::transport::metrics::InFlightGuard,
}

impl RequestObserver {
    #[cfg_attr(not(any(feature = "tracing", feature = "metrics")), allow(unused_variables))]
    pub(crate) fn start(req: &TransportRequest) -> Self {
        #[cfg(feature = "metrics")]
        let labels = crate::transport::metrics::RequestLabels::of(req);
        #[cfg(feature = "metrics")]
        let inflight = crate::transport::metrics::InFlightGuard::new(&labels);

        Self {
            #[cfg(feature = "metrics")]
            labels,
            #[cfg(any(feature = "tracing", feature = "metrics"))]
            start: std::time::Instant::now(),
            #[cfg(feature = "tracing")]
            span: tracing::info_span!(
                "mailerlite.request",
                http.method = %req.method,
                mailerlite.resource = req.resource,
                http.host = %req.url.host_str().unwrap_or_default(),
                http.path = %req.url.path(),
                http.status = field::Empty,
                request_id = field::Empty,
                latency_ms = field::Empty,
                error_kind = field::Empty,
            ),
            #[cfg(feature = "metrics")]
            _inflight: inflight,
        }
    }

    #[cfg(feature = "tracing")]
    pub(crate) fn span(&self) -> &tracing::Span {
        &self.span
    }

    /// Record the outcome and hand the raw reply back unchanged.
    pub(crate) fn finish(
        self,
        outcome: Result<TransportResponse, Error>,
    ) -> Result<Response, Error> {
        #[cfg(feature = "tracing")]
        self.span
            .record("latency_ms", self.start.elapsed().as_millis() as i64);

        let resp = match outcome {
            Ok(resp) => resp,
            Err(err) => {
                #[cfg(feature = "tracing")]
                {
                    self.span.record("error_kind", field::debug(err.kind()));
                    tracing::debug!(parent: &self.span, error = %err, "request failed");
                }
                #[cfg(feature = "metrics")]
                crate::transport::metrics::record_outcome(
                    &self.labels,
                    None,
                    self.start.elapsed(),
                    Some(err.kind()),
                );
                return Err(err);
            }
        };

        let response = Response {
            status: resp.status,
            headers: resp.headers,
            body: resp.body,
        };

        #[cfg(feature = "tracing")]
        {
            self.span
                .record("http.status", response.status.as_u16() as i64);
            if let Some(rid) = response.request_id() {
                self.span.record("request_id", field::display(rid));
            }
        }

        #[cfg(feature = "metrics")]
        crate::transport::metrics::record_outcome(
            &self.labels,
            Some(response.status),
            self.start.elapsed(),
            None,
        );

        Ok(response)
    }
}
