//! MailerLite resource services.
//!
//! Services are reached through accessors on the clients, e.g.
//! `Client::subscribers()` / `BlockingClient::subscribers()`. Every call returns
//! the raw [`Response`](crate::Response) whatever its status code.

pub mod automations;
pub mod batch;
pub mod campaigns;
pub mod fields;
pub mod forms;
pub mod groups;
pub mod segments;
pub mod subscribers;
pub mod timezones;
pub mod webhooks;

pub use automations::*;
pub use batch::*;
pub use campaigns::*;
pub use fields::*;
pub use forms::*;
pub use groups::*;
pub use segments::*;
pub use subscribers::*;
pub use timezones::*;
pub use webhooks::*;
