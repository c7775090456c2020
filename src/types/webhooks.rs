//! Webhook request bodies.

use crate::params::{JsonBody, string_list};

/// Body for `POST /webhooks`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateWebhook {
    /// Event names such as `subscriber.created`.
    pub events: Vec<String>,
    pub url: String,
    pub name: Option<String>,
}

impl CreateWebhook {
    #[must_use]
    pub fn new<I, S>(events: I, url: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
            url: url.into(),
            name: None,
        }
    }

    pub(crate) fn body(&self) -> JsonBody {
        JsonBody::new()
            .field("events", string_list(&self.events))
            .field("url", self.url.as_str())
            .field("name", self.name.clone())
    }
}

/// Body for `PUT /webhooks/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateWebhook {
    pub events: Vec<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    /// `Some(false)` disables the webhook.
    pub enabled: Option<bool>,
}

impl UpdateWebhook {
    pub(crate) fn body(&self) -> JsonBody {
        JsonBody::new()
            .field("events", string_list(&self.events))
            .field("name", self.name.clone())
            .field("url", self.url.clone())
            .field("enabled", self.enabled)
    }
}
