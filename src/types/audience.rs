//! List filters for groups, segments, fields and forms.

use crate::SubscriberId;
use crate::params::QueryParams;

/// Filters for `GET /groups`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListGroups {
    /// Partial match on the group name.
    pub filter_name: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// `name`, `total`, `open_rate`, `click_rate`, `created_at`; prefix with `-` for descending.
    pub sort: Option<String>,
}

impl ListGroups {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("name", self.filter_name.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
            .opt("sort", self.sort.as_deref())
    }
}

/// Filters for `GET /groups/{id}/subscribers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListGroupSubscribers {
    pub filter_status: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<String>,
}

impl ListGroupSubscribers {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
            .opt("sort", self.sort.as_deref())
    }
}

/// Paging for `GET /segments`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSegments {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListSegments {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .opt("limit", self.limit)
            .opt("page", self.page)
    }
}

/// Filters for `GET /segments/{id}/subscribers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSegmentSubscribers {
    pub filter_status: Option<String>,
    pub limit: Option<u32>,
    /// Last subscriber id of the previous page (`meta.last`).
    pub after: Option<SubscriberId>,
}

impl ListSegmentSubscribers {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .opt("limit", self.limit)
            .opt("after", self.after.as_ref())
    }
}

/// Filters for `GET /fields`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFields {
    /// Partial match on the field name.
    pub filter_keyword: Option<String>,
    /// `text`, `number` or `date`.
    pub filter_type: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListFields {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("keyword", self.filter_keyword.as_deref())
            .filter("type", self.filter_type.as_deref())
            .opt("sort", self.sort.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
    }
}

/// Filters for `GET /forms/{type}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListForms {
    pub filter_name: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<String>,
}

impl ListForms {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("name", self.filter_name.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
            .opt("sort", self.sort.as_deref())
    }
}

/// Filters for `GET /forms/{id}/subscribers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFormSubscribers {
    pub filter_status: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListFormSubscribers {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("status", self.filter_status.as_deref())
            .opt("limit", self.limit)
            .opt("page", self.page)
    }
}
