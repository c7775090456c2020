//! High-level asynchronous MailerLite client.

use super::shared::{ClientConfig, ClientCore, RequestObserver};
use crate::{
    ApiToken, Error, RequestHookContext, api,
    transport::{
        async_transport::{AsyncTransport, DynAsyncTransport, ReqwestAsync},
        request::{Request, RequestBody, Response},
    },
    util::url::parse_path,
};
use http::{HeaderMap, Method};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use url::Url;

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Point the client at another API root (e.g. a proxy or a mock server).
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.config.base_url = base.into();
        self
    }

    /// Ignore system proxy environment variables.
    pub fn no_system_proxy(mut self) -> Self {
        self.config.no_proxy = true;
        self
    }

    /// Accept invalid TLS certificates (**dangerous**).
    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.config.insecure = yes;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Adjust the overall per-request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.config.timeout = value;
        self
    }

    /// Adjust the connection establishment timeout.
    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.config.connect_timeout = value;
        self
    }

    /// Adjust the response read timeout.
    pub fn read_timeout(mut self, value: Duration) -> Self {
        self.config.read_timeout = value;
        self
    }

    /// Add a default header applied to every request.
    pub fn default_header(
        mut self,
        name: http::header::HeaderName,
        value: http::HeaderValue,
    ) -> Self {
        self.config.default_headers.insert(name, value);
        self
    }

    /// Add a set of default headers applied to every request.
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

    /// Finalise configuration and build the client.
    pub fn build(self) -> Result<Client, Error> {
        let (core, settings) = self.config.into_core()?;

        let transport: DynAsyncTransport = Arc::new(ReqwestAsync::try_new(
            settings.insecure,
            &settings.user_agent,
            settings.timeout,
            settings.connect_timeout,
            settings.read_timeout,
            settings.no_proxy,
        )?);

        Ok(Client {
            inner: Arc::new(Inner { core, transport }),
        })
    }
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    core: ClientCore,
    transport: DynAsyncTransport,
}

impl Client {
    pub fn builder(token: impl Into<ApiToken>) -> ClientBuilder {
        ClientBuilder {
            config: ClientConfig::new(token.into()),
        }
    }

    /// Builder seeded from `MAILERLITE_API_TOKEN` and, if set, `MAILERLITE_API_URL`.
    pub fn builder_from_env() -> Result<ClientBuilder, Error> {
        Ok(ClientBuilder {
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
    pub fn subscribers(&self) -> api::SubscribersService {
        api::SubscribersService::new(self.clone())
    }

    #[must_use]
    pub fn campaigns(&self) -> api::CampaignsService {
        api::CampaignsService::new(self.clone())
    }

    #[must_use]
    pub fn groups(&self) -> api::GroupsService {
        api::GroupsService::new(self.clone())
    }

    #[must_use]
    pub fn segments(&self) -> api::SegmentsService {
        api::SegmentsService::new(self.clone())
    }

    #[must_use]
    pub fn fields(&self) -> api::FieldsService {
        api::FieldsService::new(self.clone())
    }

    #[must_use]
    pub fn forms(&self) -> api::FormsService {
        api::FormsService::new(self.clone())
    }

    #[must_use]
    pub fn automations(&self) -> api::AutomationsService {
        api::AutomationsService::new(self.clone())
    }

    #[must_use]
    pub fn webhooks(&self) -> api::WebhooksService {
        api::WebhooksService::new(self.clone())
    }

    #[must_use]
    pub fn batch(&self) -> api::BatchService {
        api::BatchService::new(self.clone())
    }

    #[must_use]
    pub fn timezones(&self) -> api::TimezonesService {
        api::TimezonesService::new(self.clone())
    }

    /// `GET <path>`; `path` may be absolute or relative to the base URL and may carry a query.
    pub async fn get(&self, path: &str) -> Result<Response, Error> {
        self.send_path(Method::GET, path, None).await
    }

    /// `POST <path>` with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Response, Error> {
        self.send_path(Method::POST, path, body).await
    }

    /// `PUT <path>` with an optional JSON body.
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Response, Error> {
        self.send_path(Method::PUT, path, body).await
    }

    /// `DELETE <path>`.
    pub async fn delete(&self, path: &str) -> Result<Response, Error> {
        self.send_path(Method::DELETE, path, None).await
    }

    async fn send_path(
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
        self.send(req).await
    }

    /// Send a hand-built [`Request`], e.g. for endpoints without a service method.
    ///
    /// ```no_run
    /// # async fn demo(client: mailerlite_sdk::Client) -> mailerlite_sdk::Result<()> {
    /// use mailerlite_sdk::{QueryParams, Request};
    ///
    /// let req = Request::get(["groups"]).query(QueryParams::new().filters([("name", "news")]));
    /// let resp = client.send(req).await?;
    /// println!("{}", resp.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, req: Request) -> Result<Response, Error> {
        let mut prepared = self.inner.core.prepare(&req)?;
        let observer = RequestObserver::start(&prepared);

        let send = async {
            match self.inner.core.run_hook(&mut prepared) {
                Ok(()) => self.inner.transport.send(prepared).await,
                Err(err) => Err(err),
            }
        };
        #[cfg(feature = "tracing")]
        let send = send.instrument(observer.span().clone());

        let outcome = send.await;
        observer.finish(outcome)
    }
}
