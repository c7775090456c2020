//! Request parameter types.

pub mod audience;
pub mod automations;
pub mod batch;
pub mod campaigns;
pub mod common;
pub mod subscribers;
pub mod webhooks;

pub use audience::*;
pub use automations::*;
pub use batch::BatchRequest;
pub use campaigns::*;
pub use common::*;
pub use subscribers::*;
pub use webhooks::*;
