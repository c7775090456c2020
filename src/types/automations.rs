//! Automation list and activity filters.

use crate::params::QueryParams;

/// Filters for `GET /automations`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListAutomations {
    /// `true` for enabled automations, `false` for disabled ones.
    pub filter_status: Option<String>,
    pub filter_name: Option<String>,
    /// Only automations triggered by this group.
    pub filter_group: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListAutomations {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .filter("name", self.filter_name.as_deref())
            .filter("group", self.filter_group.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
    }
}

/// Filters for `GET /automations/{id}/activity`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutomationActivity {
    /// `completed`, `active`, `canceled` or `failed`. The API requires it.
    pub filter_status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub scheduled_from: Option<String>,
    pub scheduled_to: Option<String>,
    /// Email substring to search for.
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl AutomationActivity {
    #[must_use]
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            filter_status: Some(status.into()),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .filter("date_from", self.date_from.as_deref())
            .filter("date_to", self.date_to.as_deref())
            .filter("scheduled_from", self.scheduled_from.as_deref())
            .filter("scheduled_to", self.scheduled_to.as_deref())
            .filter("keyword", self.keyword.as_deref())
            .opt("page", self.page)
            .opt("limit", self.limit)
    }
}
