use crate::transport::request::{Request, Response};
use crate::{CreateWebhook, Error, UpdateWebhook, WebhookId};

fn list_request() -> Request {
    Request::get(["webhooks"])
}

fn fetch_request(id: &WebhookId) -> Request {
    Request::get(["webhooks", id.as_str()])
}

fn create_request(params: &CreateWebhook) -> Request {
    Request::post(["webhooks"]).json(params.body())
}

fn update_request(id: &WebhookId, params: &UpdateWebhook) -> Request {
    Request::put(["webhooks", id.as_str()]).json(params.body())
}

fn delete_request(id: &WebhookId) -> Request {
    Request::delete(["webhooks", id.as_str()])
}

/// MailerLite webhooks APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct WebhooksService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl WebhooksService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /webhooks`
    pub async fn list(&self) -> Result<Response, Error> {
        self.client.send(list_request()).await
    }

    /// `GET /webhooks/<id>`
    pub async fn fetch(&self, id: impl Into<WebhookId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into())).await
    }

    /// `POST /webhooks`
    pub async fn create(&self, params: &CreateWebhook) -> Result<Response, Error> {
        self.client.send(create_request(params)).await
    }

    /// `PUT /webhooks/<id>`
    pub async fn update(
        &self,
        id: impl Into<WebhookId>,
        params: &UpdateWebhook,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), params)).await
    }

    /// `DELETE /webhooks/<id>`
    pub async fn delete(&self, id: impl Into<WebhookId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }
}

/// MailerLite webhooks APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingWebhooksService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingWebhooksService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /webhooks`
    pub fn list(&self) -> Result<Response, Error> {
        self.client.send(list_request())
    }

    /// `GET /webhooks/<id>`
    pub fn fetch(&self, id: impl Into<WebhookId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into()))
    }

    /// `POST /webhooks`
    pub fn create(&self, params: &CreateWebhook) -> Result<Response, Error> {
        self.client.send(create_request(params))
    }

    /// `PUT /webhooks/<id>`
    pub fn update(
        &self,
        id: impl Into<WebhookId>,
        params: &UpdateWebhook,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), params))
    }

    /// `DELETE /webhooks/<id>`
    pub fn delete(&self, id: impl Into<WebhookId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use serde_json::json;

    #[test]
    fn create_sends_events_and_url() {
        let mut params = CreateWebhook::new(
            ["subscriber.created", "subscriber.updated"],
            "https://hooks.example.com/ml",
        );
        params.name = Some("crm sync".into());

        let req = create_request(&params);
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.segments().unwrap(), ["webhooks"]);
        assert_eq!(
            req.json_body(),
            Some(json!({
                "events": ["subscriber.created", "subscriber.updated"],
                "url": "https://hooks.example.com/ml",
                "name": "crm sync"
            }))
        );
    }

    #[test]
    fn disabling_sends_enabled_false() {
        let req = update_request(
            &WebhookId::from("3"),
            &UpdateWebhook {
                enabled: Some(false),
                ..UpdateWebhook::default()
            },
        );
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.segments().unwrap(), ["webhooks", "3"]);
        assert_eq!(req.json_body(), Some(json!({ "enabled": false })));
    }

    #[test]
    fn empty_update_sends_empty_object() {
        let req = update_request(&WebhookId::from("3"), &UpdateWebhook::default());
        assert_eq!(req.json_body(), Some(json!({})));
    }

    #[test]
    fn read_paths() {
        assert_eq!(list_request().segments().unwrap(), ["webhooks"]);
        let id = WebhookId::from("3");
        assert_eq!(fetch_request(&id).segments().unwrap(), ["webhooks", "3"]);
        assert_eq!(delete_request(&id).method, Method::DELETE);
    }
}
