use crate::params::JsonBody;
use crate::transport::request::{Request, Response};
use crate::{Error, FormId, ListFormSubscribers, ListForms};

fn list_request(form_type: &str, params: &ListForms) -> Request {
    Request::get(["forms", form_type]).query(params.query())
}

fn fetch_request(id: &FormId) -> Request {
    Request::get(["forms", id.as_str()])
}

fn update_request(id: &FormId, name: &str) -> Request {
    Request::put(["forms", id.as_str()]).json(JsonBody::new().field("name", name))
}

fn count_request(form_type: &str) -> Request {
    Request::get(["forms", form_type]).query_pair("limit", "0")
}

fn subscribers_request(id: &FormId, params: &ListFormSubscribers) -> Request {
    Request::get(["forms", id.as_str(), "subscribers"]).query(params.query())
}

fn delete_request(id: &FormId) -> Request {
    Request::delete(["forms", id.as_str()])
}

/// MailerLite forms APIs.
///
/// `form_type` is one of `popup`, `embedded` or `promotion`.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct FormsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl FormsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /forms/<type>`
    pub async fn list(&self, form_type: &str, params: &ListForms) -> Result<Response, Error> {
        self.client.send(list_request(form_type, params)).await
    }

    /// `GET /forms/<id>`
    pub async fn fetch(&self, id: impl Into<FormId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into())).await
    }

    /// `PUT /forms/<id>`
    pub async fn update(
        &self,
        id: impl Into<FormId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into())).await
    }

    /// `GET /forms/<type>?limit=0`; the total is in `meta.total`.
    pub async fn fetch_count(&self, form_type: &str) -> Result<Response, Error> {
        self.client.send(count_request(form_type)).await
    }

    /// `GET /forms/<id>/subscribers`
    pub async fn subscribers(
        &self,
        id: impl Into<FormId>,
        params: &ListFormSubscribers,
    ) -> Result<Response, Error> {
        self.client.send(subscribers_request(&id.into(), params)).await
    }

    /// `DELETE /forms/<id>`
    pub async fn delete(&self, id: impl Into<FormId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }
}

/// MailerLite forms APIs (blocking).
///
/// ```no_run
/// # fn demo(client: mailerlite_sdk::BlockingClient) -> mailerlite_sdk::Result<()> {
/// let resp = client.forms().fetch_count("popup")?;
/// println!("{}", resp.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingFormsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingFormsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /forms/<type>`
    pub fn list(&self, form_type: &str, params: &ListForms) -> Result<Response, Error> {
        self.client.send(list_request(form_type, params))
    }

    /// `GET /forms/<id>`
    pub fn fetch(&self, id: impl Into<FormId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into()))
    }

    /// `PUT /forms/<id>`
    pub fn update(
        &self,
        id: impl Into<FormId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into()))
    }

    /// `GET /forms/<type>?limit=0`; the total is in `meta.total`.
    pub fn fetch_count(&self, form_type: &str) -> Result<Response, Error> {
        self.client.send(count_request(form_type))
    }

    /// `GET /forms/<id>/subscribers`
    pub fn subscribers(
        &self,
        id: impl Into<FormId>,
        params: &ListFormSubscribers,
    ) -> Result<Response, Error> {
        self.client.send(subscribers_request(&id.into(), params))
    }

    /// `DELETE /forms/<id>`
    pub fn delete(&self, id: impl Into<FormId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use serde_json::json;

    #[test]
    fn list_is_scoped_by_form_type() {
        let req = list_request(
            "popup",
            &ListForms {
                filter_name: Some("Spring".into()),
                limit: Some(10),
                ..ListForms::default()
            },
        );
        assert_eq!(req.segments().unwrap(), ["forms", "popup"]);
        assert_eq!(
            req.query,
            vec![
                ("filter[name]".to_owned(), "Spring".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[test]
    fn count_asks_for_zero_items_of_type() {
        let req = count_request("embedded");
        assert_eq!(req.segments().unwrap(), ["forms", "embedded"]);
        assert_eq!(req.query, vec![("limit".to_owned(), "0".to_owned())]);
    }

    #[test]
    fn update_sends_name() {
        let req = update_request(&FormId::from("8"), "Footer");
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.json_body(), Some(json!({ "name": "Footer" })));
    }

    #[test]
    fn subscribers_use_query_string() {
        let req = subscribers_request(
            &FormId::from("8"),
            &ListFormSubscribers {
                filter_status: Some("active".into()),
                ..ListFormSubscribers::default()
            },
        );
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.segments().unwrap(), ["forms", "8", "subscribers"]);
        assert!(req.body.is_none());
        assert_eq!(req.query.len(), 1);
    }

    #[test]
    fn fetch_and_delete_target_form() {
        let id = FormId::from("8");
        assert_eq!(fetch_request(&id).segments().unwrap(), ["forms", "8"]);
        assert_eq!(delete_request(&id).method, Method::DELETE);
    }
}
