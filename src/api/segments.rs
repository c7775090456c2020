use crate::params::JsonBody;
use crate::transport::request::{Request, Response};
use crate::{Error, ListSegmentSubscribers, ListSegments, SegmentId};

fn list_request(params: &ListSegments) -> Request {
    Request::get(["segments"]).query(params.query())
}

fn update_request(id: &SegmentId, name: &str) -> Request {
    Request::put(["segments", id.as_str()]).json(JsonBody::new().field("name", name))
}

fn subscribers_request(id: &SegmentId, params: &ListSegmentSubscribers) -> Request {
    Request::get(["segments", id.as_str(), "subscribers"]).query(params.query())
}

fn delete_request(id: &SegmentId) -> Request {
    Request::delete(["segments", id.as_str()])
}

/// MailerLite segments APIs. Segments are created in the dashboard only.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct SegmentsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl SegmentsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /segments`
    pub async fn list(&self, params: &ListSegments) -> Result<Response, Error> {
        self.client.send(list_request(params)).await
    }

    /// `PUT /segments/<id>`
    pub async fn update(
        &self,
        id: impl Into<SegmentId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into())).await
    }

    /// `GET /segments/<id>/subscribers`; paged with `after` (cursor).
    pub async fn subscribers(
        &self,
        id: impl Into<SegmentId>,
        params: &ListSegmentSubscribers,
    ) -> Result<Response, Error> {
        self.client.send(subscribers_request(&id.into(), params)).await
    }

    /// `DELETE /segments/<id>`
    pub async fn delete(&self, id: impl Into<SegmentId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }
}

/// MailerLite segments APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingSegmentsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingSegmentsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /segments`
    pub fn list(&self, params: &ListSegments) -> Result<Response, Error> {
        self.client.send(list_request(params))
    }

    /// `PUT /segments/<id>`
    pub fn update(
        &self,
        id: impl Into<SegmentId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into()))
    }

    /// `GET /segments/<id>/subscribers`; paged with `after` (cursor).
    pub fn subscribers(
        &self,
        id: impl Into<SegmentId>,
        params: &ListSegmentSubscribers,
    ) -> Result<Response, Error> {
        self.client.send(subscribers_request(&id.into(), params))
    }

    /// `DELETE /segments/<id>`
    pub fn delete(&self, id: impl Into<SegmentId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubscriberId;
    use http::Method;
    use serde_json::json;

    #[test]
    fn list_pages() {
        let req = list_request(&ListSegments {
            limit: Some(50),
            page: None,
        });
        assert_eq!(req.query, vec![("limit".to_owned(), "50".to_owned())]);
    }

    #[test]
    fn update_sends_name() {
        let req = update_request(&SegmentId::from("4"), "VIP");
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.segments().unwrap(), ["segments", "4"]);
        assert_eq!(req.json_body(), Some(json!({ "name": "VIP" })));
    }

    #[test]
    fn subscribers_carry_cursor() {
        let req = subscribers_request(
            &SegmentId::from("4"),
            &ListSegmentSubscribers {
                filter_status: Some("active".into()),
                limit: Some(100),
                after: Some(SubscriberId::from("31986843064993537")),
            },
        );
        assert_eq!(req.segments().unwrap(), ["segments", "4", "subscribers"]);
        assert_eq!(
            req.query,
            vec![
                ("filter[status]".to_owned(), "active".to_owned()),
                ("limit".to_owned(), "100".to_owned()),
                ("after".to_owned(), "31986843064993537".to_owned()),
            ]
        );
    }

    #[test]
    fn delete_has_no_body() {
        let req = delete_request(&SegmentId::from("4"));
        assert_eq!(req.method, Method::DELETE);
        assert!(req.body.is_none());
    }
}
