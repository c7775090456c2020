use super::{TransportRequest, TransportResponse};
use crate::error::{Error, TransportErrorKind};
use http::{HeaderMap, Method};
use std::{sync::Arc, time::Duration};
use ureq::{
    Agent, RequestBuilder,
    typestate::{WithBody, WithoutBody},
};

/// Trait implemented by any blocking HTTP layer.
pub trait BlockingTransport: Send + Sync + 'static {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynBlockingTransport = Arc<dyn BlockingTransport>;

impl<T: BlockingTransport + ?Sized> BlockingTransport for Arc<T> {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req)
    }
}

/// Default blocking transport built on `ureq`.
#[derive(Clone)]
pub struct UreqBlocking {
    agent: Agent,
}

impl UreqBlocking {
    /// Construct a new transport.
    ///
    /// * See [`crate::transport::async_transport::ReqwestAsync::try_new`] for parameter meaning.
    pub fn try_new(
        insecure: bool,
        ua: &str,
        timeout: Duration,
        connect_timeout: Duration,
        read_timeout: Duration,
        no_proxy: bool,
    ) -> Result<Self, Error> {
        let mut builder = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .timeout_connect(Some(connect_timeout))
            .timeout_recv_body(Some(read_timeout))
            .user_agent(ua);

        if no_proxy {
            builder = builder.proxy(None);
        }

        if insecure {
            builder = builder.tls_config(
                ureq::tls::TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }

        Ok(Self {
            agent: Agent::new_with_config(builder.build()),
        })
    }

    fn bodyless(&self, method: &Method, url: &str) -> Option<RequestBuilder<WithoutBody>> {
        match *method {
            Method::GET => Some(self.agent.get(url)),
            Method::DELETE => Some(self.agent.delete(url)),
            Method::HEAD => Some(self.agent.head(url)),
            Method::OPTIONS => Some(self.agent.options(url)),
            _ => None,
        }
    }

    fn with_body(&self, method: &Method, url: &str) -> Option<RequestBuilder<WithBody>> {
        match *method {
            Method::POST => Some(self.agent.post(url)),
            Method::PUT => Some(self.agent.put(url)),
            Method::PATCH => Some(self.agent.patch(url)),
            _ => None,
        }
    }
}

fn prepare<B>(
    mut req: RequestBuilder<B>,
    headers: &HeaderMap,
    query: Vec<(String, String)>,
    timeout: Duration,
) -> RequestBuilder<B> {
    req = req.query_pairs(query);
    for (name, value) in headers.iter() {
        req = req.header(name, value);
    }
    req.config().timeout_global(Some(timeout)).build()
}

impl BlockingTransport for UreqBlocking {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let headers = req.wire_headers();
        let TransportRequest {
            method,
            url,
            query,
            body,
            timeout,
            ..
        } = req;
        let path = url.path().to_string().into_boxed_str();
        let url = url.as_str();
        let method_for_error = method.clone();

        let map_err = |err: ureq::Error| {
            let kind = match &err {
                ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
                ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                    TransportErrorKind::Connect
                }
                ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                    TransportErrorKind::Timeout
                }
                ureq::Error::Io(io)
                    if matches!(
                        io.kind(),
                        std::io::ErrorKind::ConnectionRefused
                            | std::io::ErrorKind::ConnectionReset
                            | std::io::ErrorKind::ConnectionAborted
                            | std::io::ErrorKind::NotConnected
                    ) =>
                {
                    TransportErrorKind::Connect
                }
                _ => TransportErrorKind::Other,
            };

            Error::Transport {
                method: method_for_error.clone(),
                path: path.clone(),
                kind,
                source: Box::new(err),
            }
        };

        let mut response = if let Some(req) = self.bodyless(&method, url) {
            let req = prepare(req, &headers, query, timeout);
            match body {
                Some(body) => req.force_send_body().send(body.bytes).map_err(map_err)?,
                None => req.call().map_err(map_err)?,
            }
        } else if let Some(req) = self.with_body(&method, url) {
            let req = prepare(req, &headers, query, timeout);
            match body {
                Some(body) => req.send(body.bytes).map_err(map_err)?,
                None => req.send_empty().map_err(map_err)?,
            }
        } else {
            return Err(Error::InvalidConfig {
                message: format!("unsupported HTTP method for blocking client: {method}")
                    .into_boxed_str(),
                source: None,
            });
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(map_err)?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
