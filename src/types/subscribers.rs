//! Subscriber parameters and request bodies.

use crate::GroupId;
use crate::params::{JsonBody, QueryParams, string_list};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Filters for `GET /subscribers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSubscribers {
    /// `active`, `unsubscribed`, `unconfirmed`, `bounced` or `junk`.
    pub filter_status: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListSubscribers {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
    }
}

/// Optional subscriber attributes shared by create and update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriberAttributes {
    /// Custom field values keyed by field key (`name`, `last_name`, ...).
    pub fields: BTreeMap<String, Value>,
    pub groups: Vec<GroupId>,
    pub status: Option<String>,
    pub subscribed_at: Option<String>,
    pub ip_address: Option<String>,
    pub opted_in_at: Option<String>,
    pub optin_ip: Option<String>,
    pub unsubscribed_at: Option<String>,
}

impl SubscriberAttributes {
    pub(crate) fn write(&self, body: JsonBody) -> JsonBody {
        let fields: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        body.field("fields", Value::Object(fields))
            .field("groups", string_list(&self.groups))
            .field("status", self.status.clone())
            .field("subscribed_at", self.subscribed_at.clone())
            .field("ip_address", self.ip_address.clone())
            .field("opted_in_at", self.opted_in_at.clone())
            .field("optin_ip", self.optin_ip.clone())
            .field("unsubscribed_at", self.unsubscribed_at.clone())
    }

    pub(crate) fn body(&self) -> JsonBody {
        self.write(JsonBody::new())
    }
}

/// Body for `POST /subscribers`.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateSubscriber {
    pub email: String,
    pub attributes: SubscriberAttributes,
}

impl CreateSubscriber {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            attributes: SubscriberAttributes::default(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: SubscriberAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub(crate) fn body(&self) -> JsonBody {
        self.attributes
            .write(JsonBody::new().field("email", self.email.as_str()))
    }
}
