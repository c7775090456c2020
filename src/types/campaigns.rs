//! Campaign parameters.
//!
//! The campaign kind and the delivery mode are enums: each variant carries the
//! settings block that only makes sense for it, so an A/B block can never be sent
//! with a regular campaign and a schedule date never leaks into a timezone-based
//! delivery.

use crate::params::{JsonBody, QueryParams, string_list};
use crate::{GroupId, SegmentId};
use serde_json::Value;

/// Filters for `GET /campaigns`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListCampaigns {
    /// `sent`, `draft` or `ready`.
    pub filter_status: Option<String>,
    /// `regular`, `ab`, `resend` or `rss`.
    pub filter_type: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListCampaigns {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .filter("type", self.filter_type.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
    }
}

/// One email of a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignEmail {
    pub subject: String,
    pub from_name: String,
    pub from: String,
    /// Full HTML content; only accepted on advanced plans.
    pub content: Option<String>,
}

impl CampaignEmail {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        from_name: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            from_name: from_name.into(),
            from: from.into(),
            content: None,
        }
    }

    fn to_value(&self) -> Value {
        JsonBody::new()
            .field("subject", self.subject.as_str())
            .field("from_name", self.from_name.as_str())
            .field("from", self.from.as_str())
            .field("content", self.content.clone())
            .into_value()
    }
}

/// What an A/B test varies, with the value used for variant B.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbTest {
    Subject { subject: String },
    Sender { from_name: String, from: String },
    /// Any other test type; no `b_value` is sent.
    Other(String),
}

impl AbTest {
    fn test_type(&self) -> &str {
        match self {
            Self::Subject { .. } => "subject",
            Self::Sender { .. } => "sender",
            Self::Other(name) => name,
        }
    }

    fn b_value(&self) -> JsonBody {
        match self {
            Self::Subject { subject } => JsonBody::new().field("subject", subject.as_str()),
            Self::Sender { from_name, from } => JsonBody::new()
                .field("from_name", from_name.as_str())
                .field("from", from.as_str()),
            Self::Other(_) => JsonBody::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbSettings {
    pub test: AbTest,
    /// `o` (opens) or `c` (clicks).
    pub select_winner_by: Option<String>,
    pub after_time_amount: Option<u32>,
    /// `h` (hours) or `d` (days).
    pub after_time_unit: Option<String>,
    /// Percentage of subscribers that receive the test.
    pub test_split: Option<u32>,
}

impl AbSettings {
    #[must_use]
    pub fn new(test: AbTest) -> Self {
        Self {
            test,
            select_winner_by: None,
            after_time_amount: None,
            after_time_unit: None,
            test_split: None,
        }
    }

    fn body(&self) -> JsonBody {
        JsonBody::new()
            .field("test_type", self.test.test_type())
            .field("select_winner_by", self.select_winner_by.clone())
            .field("after_time_amount", self.after_time_amount)
            .field("after_time_unit", self.after_time_unit.clone())
            .field("test_split", self.test_split)
            .object("b_value", self.test.b_value())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResendSettings {
    pub test_type: Option<String>,
    pub select_winner_by: Option<String>,
    /// Subject line used for the resend.
    pub subject: Option<String>,
}

impl ResendSettings {
    fn body(&self) -> JsonBody {
        JsonBody::new()
            .field("test_type", self.test_type.clone())
            .field("select_winner_by", self.select_winner_by.clone())
            .object(
                "b_value",
                JsonBody::new().field("subject", self.subject.clone()),
            )
    }
}

/// Campaign type together with its type-specific settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampaignKind {
    Regular,
    Ab(AbSettings),
    Resend(ResendSettings),
    /// Any other type name, sent as-is without extra settings.
    Other(String),
}

impl CampaignKind {
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Regular => "regular",
            Self::Ab(_) => "ab",
            Self::Resend(_) => "resend",
            Self::Other(name) => name,
        }
    }
}

/// Body for `POST /campaigns` and `PUT /campaigns/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub kind: CampaignKind,
    pub emails: Vec<CampaignEmail>,
    /// Language of the unsubscribe template.
    pub language_id: Option<u32>,
    pub groups: Vec<GroupId>,
    /// Takes precedence over `groups` on the server when both are set.
    pub segments: Vec<SegmentId>,
}

impl CampaignDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CampaignKind, emails: Vec<CampaignEmail>) -> Self {
        Self {
            name: name.into(),
            kind,
            emails,
            language_id: None,
            groups: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// `include_type` is false for updates, where the type cannot change.
    pub(crate) fn body(&self, include_type: bool) -> JsonBody {
        let mut body = JsonBody::new().field("name", self.name.as_str());
        if include_type {
            body = body.field("type", self.kind.type_name());
        }
        body = body
            .field(
                "emails",
                Value::Array(self.emails.iter().map(CampaignEmail::to_value).collect()),
            )
            .field("language_id", self.language_id)
            .field("groups", string_list(&self.groups))
            .field("segments", string_list(&self.segments));

        match &self.kind {
            CampaignKind::Ab(settings) => body.object("ab_settings", settings.body()),
            CampaignKind::Resend(settings) => body.object("resend_settings", settings.body()),
            CampaignKind::Regular | CampaignKind::Other(_) => body,
        }
    }
}

/// Send time, used by scheduled and timezone-based delivery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    /// `YYYY-MM-DD`; ignored for timezone-based delivery.
    pub date: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub timezone_id: Option<u32>,
}

impl Schedule {
    fn body(&self, with_date: bool) -> JsonBody {
        let body = if with_date {
            JsonBody::new().field("date", self.date.clone())
        } else {
            JsonBody::new()
        };
        body.field("hours", self.hours.clone())
            .field("minutes", self.minutes.clone())
            .field("timezone_id", self.timezone_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Instant,
    Scheduled(Schedule),
    TimezoneBased(Schedule),
    Other(String),
}

impl Delivery {
    fn name(&self) -> &str {
        match self {
            Self::Instant => "instant",
            Self::Scheduled(_) => "scheduled",
            Self::TimezoneBased(_) => "timezone_based",
            Self::Other(name) => name,
        }
    }
}

/// When the resend of an A/B or resend campaign goes out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResendSchedule {
    pub delivery: Option<String>,
    pub schedule: Schedule,
}

/// Body for `POST /campaigns/{id}/schedule`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleCampaign {
    /// Required for every campaign type except RSS.
    pub delivery: Option<Delivery>,
    pub resend: Option<ResendSchedule>,
}

impl ScheduleCampaign {
    #[must_use]
    pub fn new(delivery: Delivery) -> Self {
        Self {
            delivery: Some(delivery),
            resend: None,
        }
    }

    pub(crate) fn body(&self) -> JsonBody {
        let mut body = JsonBody::new();
        if let Some(delivery) = &self.delivery {
            body = body.field("delivery", delivery.name());
            body = match delivery {
                Delivery::Scheduled(schedule) => body.object("schedule", schedule.body(true)),
                Delivery::TimezoneBased(schedule) => body.object("schedule", schedule.body(false)),
                Delivery::Instant | Delivery::Other(_) => body,
            };
        }
        if let Some(resend) = &self.resend {
            let block = resend
                .schedule
                .body(true)
                .field("delivery", resend.delivery.clone());
            body = body.object("resend", block);
        }
        body
    }
}

/// Body for `POST /campaigns/{id}/reports/subscriber-activity`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignActivity {
    /// `opened`, `unopened`, `clicked`, `unsubscribed`, `forwarded`, `hardbounced`,
    /// `softbounced`, `junk`.
    pub filter_type: Option<String>,
    /// Email substring to search for.
    pub filter_search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl CampaignActivity {
    pub(crate) fn body(&self) -> JsonBody {
        JsonBody::new()
            .object(
                "filter",
                JsonBody::new()
                    .field("type", self.filter_type.clone())
                    .field("search", self.filter_search.clone()),
            )
            .field("page", self.page)
            .field("limit", self.limit)
            .field("sort", self.sort.clone())
    }
}
