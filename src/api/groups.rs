use crate::params::JsonBody;
use crate::transport::request::{Request, Response};
use crate::{Error, GroupId, ListGroupSubscribers, ListGroups, SubscriberId};

fn list_request(params: &ListGroups) -> Request {
    Request::get(["groups"]).query(params.query())
}

fn create_request(name: &str) -> Request {
    Request::post(["groups"]).json(JsonBody::new().field("name", name))
}

fn update_request(id: &GroupId, name: &str) -> Request {
    Request::put(["groups", id.as_str()]).json(JsonBody::new().field("name", name))
}

fn subscribers_request(id: &GroupId, params: &ListGroupSubscribers) -> Request {
    Request::get(["groups", id.as_str(), "subscribers"]).query(params.query())
}

fn assign_request(group: &GroupId, subscriber: &SubscriberId) -> Request {
    Request::post(["subscribers", subscriber.as_str(), "groups", group.as_str()])
}

fn unassign_request(group: &GroupId, subscriber: &SubscriberId) -> Request {
    Request::delete(["subscribers", subscriber.as_str(), "groups", group.as_str()])
}

fn delete_request(id: &GroupId) -> Request {
    Request::delete(["groups", id.as_str()])
}

/// MailerLite groups APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct GroupsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl GroupsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl GroupsService {
    /// `GET /groups`
    pub async fn list(&self, params: &ListGroups) -> Result<Response, Error> {
        self.client.send(list_request(params)).await
    }

    /// `POST /groups`
    pub async fn create(&self, name: impl Into<String>) -> Result<Response, Error> {
        self.client.send(create_request(&name.into())).await
    }

    /// `PUT /groups/<id>`
    pub async fn update(
        &self,
        id: impl Into<GroupId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into())).await
    }

    /// `GET /groups/<id>/subscribers`
    pub async fn subscribers(
        &self,
        id: impl Into<GroupId>,
        params: &ListGroupSubscribers,
    ) -> Result<Response, Error> {
        self.client.send(subscribers_request(&id.into(), params)).await
    }

    /// `POST /subscribers/<subscriber>/groups/<group>`
    pub async fn assign_subscriber(
        &self,
        group: impl Into<GroupId>,
        subscriber: impl Into<SubscriberId>,
    ) -> Result<Response, Error> {
        self.client
            .send(assign_request(&group.into(), &subscriber.into()))
            .await
    }

    /// `DELETE /subscribers/<subscriber>/groups/<group>`
    pub async fn unassign_subscriber(
        &self,
        group: impl Into<GroupId>,
        subscriber: impl Into<SubscriberId>,
    ) -> Result<Response, Error> {
        self.client
            .send(unassign_request(&group.into(), &subscriber.into()))
            .await
    }

    /// `DELETE /groups/<id>`
    pub async fn delete(&self, id: impl Into<GroupId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }
}

/// MailerLite groups APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingGroupsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingGroupsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingGroupsService {
    /// `GET /groups`
    pub fn list(&self, params: &ListGroups) -> Result<Response, Error> {
        self.client.send(list_request(params))
    }

    /// `POST /groups`
    pub fn create(&self, name: impl Into<String>) -> Result<Response, Error> {
        self.client.send(create_request(&name.into()))
    }

    /// `PUT /groups/<id>`
    pub fn update(
        &self,
        id: impl Into<GroupId>,
        name: impl Into<String>,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), &name.into()))
    }

    /// `GET /groups/<id>/subscribers`
    pub fn subscribers(
        &self,
        id: impl Into<GroupId>,
        params: &ListGroupSubscribers,
    ) -> Result<Response, Error> {
        self.client.send(subscribers_request(&id.into(), params))
    }

    /// `POST /subscribers/<subscriber>/groups/<group>`
    pub fn assign_subscriber(
        &self,
        group: impl Into<GroupId>,
        subscriber: impl Into<SubscriberId>,
    ) -> Result<Response, Error> {
        self.client
            .send(assign_request(&group.into(), &subscriber.into()))
    }

    /// `DELETE /subscribers/<subscriber>/groups/<group>`
    pub fn unassign_subscriber(
        &self,
        group: impl Into<GroupId>,
        subscriber: impl Into<SubscriberId>,
    ) -> Result<Response, Error> {
        self.client
            .send(unassign_request(&group.into(), &subscriber.into()))
    }

    /// `DELETE /groups/<id>`
    pub fn delete(&self, id: impl Into<GroupId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use serde_json::json;

    #[test]
    fn list_serializes_name_filter_and_sort() {
        let req = list_request(&ListGroups {
            filter_name: Some("news".into()),
            sort: Some("-created_at".into()),
            ..ListGroups::default()
        });
        assert_eq!(req.segments().unwrap(), ["groups"]);
        assert_eq!(
            req.query,
            vec![
                ("filter[name]".to_owned(), "news".to_owned()),
                ("sort".to_owned(), "-created_at".to_owned()),
            ]
        );
    }

    #[test]
    fn create_and_update_send_name() {
        let create = create_request("Newsletter");
        assert_eq!(create.method, Method::POST);
        assert_eq!(create.json_body(), Some(json!({ "name": "Newsletter" })));

        let update = update_request(&GroupId::from("12"), "Weekly");
        assert_eq!(update.method, Method::PUT);
        assert_eq!(update.segments().unwrap(), ["groups", "12"]);
        assert_eq!(update.json_body(), Some(json!({ "name": "Weekly" })));
    }

    #[test]
    fn subscribers_use_query_string() {
        let req = subscribers_request(
            &GroupId::from("12"),
            &ListGroupSubscribers {
                filter_status: Some("unsubscribed".into()),
                page: Some(3),
                ..ListGroupSubscribers::default()
            },
        );
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.segments().unwrap(), ["groups", "12", "subscribers"]);
        assert!(req.body.is_none());
        assert_eq!(
            req.query,
            vec![
                ("filter[status]".to_owned(), "unsubscribed".to_owned()),
                ("page".to_owned(), "3".to_owned()),
            ]
        );
    }

    #[test]
    fn assignment_is_addressed_through_the_subscriber() {
        let group = GroupId::from("12");
        let subscriber = SubscriberId::from("99");

        let assign = assign_request(&group, &subscriber);
        assert_eq!(assign.method, Method::POST);
        assert_eq!(assign.segments().unwrap(), ["subscribers", "99", "groups", "12"]);
        assert!(assign.body.is_none());

        let unassign = unassign_request(&group, &subscriber);
        assert_eq!(unassign.method, Method::DELETE);
        assert_eq!(unassign.segments().unwrap(), ["subscribers", "99", "groups", "12"]);
    }

    #[test]
    fn delete_targets_group() {
        let req = delete_request(&GroupId::from(5_u64));
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.segments().unwrap(), ["groups", "5"]);
    }
}
