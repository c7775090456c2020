use crate::params::JsonBody;
use crate::transport::request::{Request, Response};
use crate::{Error, FieldId, ListFields};

fn list_request(params: &ListFields) -> Request {
    Request::get(["fields"]).query(params.query())
}

fn create_request(name: &str, field_type: &str) -> Request {
    Request::post(["fields"]).json(
        JsonBody::new()
            .field("name", name)
            .field("type", field_type),
    )
}

fn update_request(id: &FieldId, name: &str) -> Request {
    Request::put(["fields", id.as_str()]).json(JsonBody::new().field("name", name))
}

fn delete_request(id: &FieldId) -> Request {
    Request::delete(["fields", id.as_str()])
}

/// MailerLite custom fields APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct FieldsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl FieldsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /fields`
    pub async fn list(&self, params: &ListFields) -> Result<Response, Error> {
        self.client.send(list_request(params)).await
    }

    /// `POST /fields`; `field_type` is `text`, `number` or `date`.
    pub async fn create(
        &self,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client
            .send(create_request(&name.into(), &field_type.into()))
            .await
    }

    /// `PUT /fields/<id>`
    pub async fn update(
        &self,
        id: impl Into<FieldId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into())).await
    }

    /// `DELETE /fields/<id>`
    pub async fn delete(&self, id: impl Into<FieldId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }
}

/// MailerLite custom fields APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingFieldsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingFieldsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /fields`
    pub fn list(&self, params: &ListFields) -> Result<Response, Error> {
        self.client.send(list_request(params))
    }

    /// `POST /fields`; `field_type` is `text`, `number` or `date`.
    pub fn create(
        &self,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client
            .send(create_request(&name.into(), &field_type.into()))
    }

    /// `PUT /fields/<id>`
    pub fn update(
        &self,
        id: impl Into<FieldId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into()))
    }

    /// `DELETE /fields/<id>`
    pub fn delete(&self, id: impl Into<FieldId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use serde_json::json;

    #[test]
    fn list_serializes_keyword_and_type() {
        let req = list_request(&ListFields {
            filter_keyword: Some("comp".into()),
            filter_type: Some("text".into()),
            sort: Some("name".into()),
            ..ListFields::default()
        });
        assert_eq!(
            req.query,
            vec![
                ("filter[keyword]".to_owned(), "comp".to_owned()),
                ("filter[type]".to_owned(), "text".to_owned()),
                ("sort".to_owned(), "name".to_owned()),
            ]
        );
    }

    #[test]
    fn create_sends_name_and_type() {
        let req = create_request("company", "text");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.segments().unwrap(), ["fields"]);
        assert_eq!(
            req.json_body(),
            Some(json!({ "name": "company", "type": "text" }))
        );
    }

    #[test]
    fn update_and_delete_target_field() {
        let id = FieldId::from("77");
        let update = update_request(&id, "organisation");
        assert_eq!(update.segments().unwrap(), ["fields", "77"]);
        assert_eq!(update.json_body(), Some(json!({ "name": "organisation" })));
        assert_eq!(delete_request(&id).method, Method::DELETE);
    }
}
