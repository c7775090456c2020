//! High-level blocking MailerLite client.

use super::shared::{ClientConfig, ClientCore, RequestObserver};
use crate::{
    ApiToken, Error, RequestHookContext, api,
    transport::{
        blocking_transport::{BlockingTransport, DynBlockingTransport, UreqBlocking},
        request::{Request, RequestBody, Response},
    },
    util::url::parse_path,
};
use http::{HeaderMap, Method};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use url::Url;

/// Configures and constructs [`BlockingClient`].
pub struct BlockingClientBuilder {
    config: ClientConfig,
}

impl BlockingClientBuilder {
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.config.base_url = base.into();
        self
    }

    pub fn no_system_proxy(mut self) -> Self {
        self.config.no_proxy = true;
        self
    }

    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.config.insecure = yes;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.config.timeout = value;
        self
    }

    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.config.connect_timeout = value;
        self
    }

    pub fn read_timeout(mut self, value: Duration) -> Self {
        self.config.read_timeout = value;
        self
    }

    pub fn default_header(
        mut self,
        name: http::header::HeaderName,
        value: http::HeaderValue,
    ) -> Self {
        self.config.default_headers.insert(name, value);
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.config.default_headers.extend(headers);
        self
    }

    /// Add a hook invoked right before every request is sent.
    pub fn request_hook<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.config.request_hook = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<BlockingClient, Error> {
        let (core, settings) = self.config.into_core()?;

        let transport: DynBlockingTransport = Arc::new(UreqBlocking::try_new(
            settings.insecure,
            &settings.user_agent,
            settings.timeout,
            settings.connect_timeout,
            settings.read_timeout,
            settings.no_proxy,
        )?);

        Ok(BlockingClient {
            inner: Arc::new(Inner { core, transport }),
        })
    }
}

#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner>,
}

struct Inner {
    core: ClientCore,
    transport: DynBlockingTransport,
}

impl BlockingClient {
    pub fn builder(token: impl Into<ApiToken>) -> BlockingClientBuilder {
        BlockingClientBuilder {
            config: ClientConfig::new(token.into()),
        }
    }

    pub fn builder_from_env() -> Result<BlockingClientBuilder, Error> {
        Ok(BlockingClientBuilder {
            config: ClientConfig::from_env()?,
        })
    }

    pub fn new(token: impl Into<ApiToken>) -> Result<Self, Error> {
        Self::builder(token).build()
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::builder_from_env()?.build()
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.core.base_url()
    }

    #[must_use]
    pub fn subscribers(&self) -> api::BlockingSubscribersService {
        api::BlockingSubscribersService::new(self.clone())
    }

    #[must_use]
    pub fn campaigns(&self) -> api::BlockingCampaignsService {
        api::BlockingCampaignsService::new(self.clone())
    }

    #[must_use]
    pub fn groups(&self) -> api::BlockingGroupsService {
        api::BlockingGroupsService::new(self.clone())
    }

    #[must_use]
    pub fn segments(&self) -> api::BlockingSegmentsService {
        api::BlockingSegmentsService::new(self.clone())
    }

    #[must_use]
    pub fn fields(&self) -> api::BlockingFieldsService {
        api::BlockingFieldsService::new(self.clone())
    }

    #[must_use]
    pub fn forms(&self) -> api::BlockingFormsService {
        api::BlockingFormsService::new(self.clone())
    }

    #[must_use]
    pub fn automations(&self) -> api::BlockingAutomationsService {
        api::BlockingAutomationsService::new(self.clone())
    }

    #[must_use]
    pub fn webhooks(&self) -> api::BlockingWebhooksService {
        api::BlockingWebhooksService::new(self.clone())
    }

    #[must_use]
    pub fn batch(&self) -> api::BlockingBatchService {
        api::BlockingBatchService::new(self.clone())
    }

    #[must_use]
    pub fn timezones(&self) -> api::BlockingTimezonesService {
        api::BlockingTimezonesService::new(self.clone())
    }

    /// `GET <path>`; `path` may be absolute or relative to the base URL and may carry a query.
    pub fn get(&self, path: &str) -> Result<Response, Error> {
        self.send_path(Method::GET, path, None)
    }

    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<Response, Error> {
        self.send_path(Method::POST, path, body)
    }

    pub fn put(&self, path: &str, body: Option<&Value>) -> Result<Response, Error> {
        self.send_path(Method::PUT, path, body)
    }

    pub fn delete(&self, path: &str) -> Result<Response, Error> {
        self.send_path(Method::DELETE, path, None)
    }

    fn send_path(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, Error> {
        let (target, query) = parse_path(path)?;
        let mut req = Request::with_target(method, target);
        req.query = query;
        if let Some(body) = body {
            req = req.body(RequestBody::json(body));
        }
        self.send(req)
    }

    /// Send a hand-built [`Request`], e.g. for endpoints without a service method.
    pub fn send(&self, req: Request) -> Result<Response, Error> {
        let mut prepared = self.inner.core.prepare(&req)?;
        let observer = RequestObserver::start(&prepared);

        #[cfg(feature = "tracing")]
        let _enter = observer.span().clone().entered();

        let outcome = self
            .inner
            .core
            .run_hook(&mut prepared)
            .and_then(|()| self.inner.transport.send(prepared));
        observer.finish(outcome)
    }
}
