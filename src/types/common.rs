//! Identifiers used in endpoint paths.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }
    };
}

resource_id!(
    /// A subscriber id, or the subscriber's email address where the API accepts either.
    SubscriberId
);
resource_id!(
    /// A campaign id.
    CampaignId
);
resource_id!(
    /// A group id.
    GroupId
);
resource_id!(
    /// A segment id.
    SegmentId
);
resource_id!(
    /// A custom field id.
    FieldId
);
resource_id!(
    /// A form id.
    FormId
);
resource_id!(
    /// An automation id.
    AutomationId
);
resource_id!(
    /// A webhook id.
    WebhookId
);
