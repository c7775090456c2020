use crate::transport::request::{Request, Response};
use crate::{AutomationActivity, AutomationId, Error, ListAutomations};

fn list_request(params: &ListAutomations) -> Request {
    Request::get(["automations"]).query(params.query())
}

fn fetch_request(id: &AutomationId) -> Request {
    Request::get(["automations", id.as_str()])
}

fn activity_request(id: &AutomationId, params: &AutomationActivity) -> Request {
    Request::get(["automations", id.as_str(), "activity"]).query(params.query())
}

/// MailerLite automations APIs (read-only).
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct AutomationsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl AutomationsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /automations`
    pub async fn list(&self, params: &ListAutomations) -> Result<Response, Error> {
        self.client.send(list_request(params)).await
    }

    /// `GET /automations/<id>`
    pub async fn fetch(&self, id: impl Into<AutomationId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into())).await
    }

    /// `GET /automations/<id>/activity`
    pub async fn subscriber_activity(
        &self,
        id: impl Into<AutomationId>,
        params: &AutomationActivity,
    ) -> Result<Response, Error> {
        self.client.send(activity_request(&id.into(), params)).await
    }
}

/// MailerLite automations APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingAutomationsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingAutomationsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /automations`
    pub fn list(&self, params: &ListAutomations) -> Result<Response, Error> {
        self.client.send(list_request(params))
    }

    /// `GET /automations/<id>`
    pub fn fetch(&self, id: impl Into<AutomationId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into()))
    }

    /// `GET /automations/<id>/activity`
    pub fn subscriber_activity(
        &self,
        id: impl Into<AutomationId>,
        params: &AutomationActivity,
    ) -> Result<Response, Error> {
        self.client.send(activity_request(&id.into(), params))
    }
}
