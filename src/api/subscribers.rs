use crate::transport::request::{Request, Response};
use crate::{CreateSubscriber, Error, ListSubscribers, SubscriberAttributes, SubscriberId};

fn list_request(params: &ListSubscribers) -> Request {
    Request::get(["subscribers"]).query(params.query())
}

fn create_request(params: &CreateSubscriber) -> Request {
    Request::post(["subscribers"]).json(params.body())
}

fn update_request(id: &SubscriberId, params: &SubscriberAttributes) -> Request {
    Request::put(["subscribers", id.as_str()]).json(params.body())
}

fn fetch_request(id: &SubscriberId) -> Request {
    Request::get(["subscribers", id.as_str()])
}

fn count_request() -> Request {
    Request::get(["subscribers"]).query_pair("limit", "0")
}

fn delete_request(id: &SubscriberId) -> Request {
    Request::delete(["subscribers", id.as_str()])
}

fn forget_request(id: &SubscriberId) -> Request {
    Request::post(["subscribers", id.as_str(), "forget"])
}

/// MailerLite subscribers APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct SubscribersService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl SubscribersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl SubscribersService {
    /// `GET /subscribers`
    pub async fn list(&self, params: &ListSubscribers) -> Result<Response, Error> {
        self.client.send(list_request(params)).await
    }

    /// `POST /subscribers` (creates, or upserts by email).
    pub async fn create(&self, params: &CreateSubscriber) -> Result<Response, Error> {
        self.client.send(create_request(params)).await
    }

    /// `PUT /subscribers/<id>`
    pub async fn update(
        &self,
        id: impl Into<SubscriberId>,
        params: &SubscriberAttributes,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), params)).await
    }

    /// `GET /subscribers/<id or email>`
    pub async fn fetch(&self, id: impl Into<SubscriberId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into())).await
    }

    /// `GET /subscribers?limit=0`; the total is in the `total` field.
    pub async fn fetch_count(&self) -> Result<Response, Error> {
        self.client.send(count_request()).await
    }

    /// `DELETE /subscribers/<id>`
    pub async fn delete(&self, id: impl Into<SubscriberId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }

    /// `POST /subscribers/<id>/forget`
    pub async fn forget(&self, id: impl Into<SubscriberId>) -> Result<Response, Error> {
        self.client.send(forget_request(&id.into())).await
    }
}

/// MailerLite subscribers APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingSubscribersService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingSubscribersService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingSubscribersService {
    /// `GET /subscribers`
    pub fn list(&self, params: &ListSubscribers) -> Result<Response, Error> {
        self.client.send(list_request(params))
    }

    /// `POST /subscribers`
    pub fn create(&self, params: &CreateSubscriber) -> Result<Response, Error> {
        self.client.send(create_request(params))
    }

    /// `PUT /subscribers/<id>`
    pub fn update(
        &self,
        id: impl Into<SubscriberId>,
        params: &SubscriberAttributes,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), params))
    }

    /// `GET /subscribers/<id or email>`
    pub fn fetch(&self, id: impl Into<SubscriberId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into()))
    }

    /// `GET /subscribers?limit=0`
    pub fn fetch_count(&self) -> Result<Response, Error> {
        self.client.send(count_request())
    }

    /// `DELETE /subscribers/<id>`
    pub fn delete(&self, id: impl Into<SubscriberId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }

    /// `POST /subscribers/<id>/forget`
    pub fn forget(&self, id: impl Into<SubscriberId>) -> Result<Response, Error> {
        self.client.send(forget_request(&id.into()))
    }
}
