//! MailerLite SDK: resource builders over the MailerLite REST API, async or blocking.
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> mailerlite_sdk::Result<()> {
//! use mailerlite_sdk::{Client, ListSubscribers};
//!
//! let client = Client::new("api-token")?;
//! let response = client
//!     .subscribers()
//!     .list(&ListSubscribers {
//!         filter_status: Some("active".into()),
//!         ..ListSubscribers::default()
//!     })
//!     .await?;
//! println!("{} {}", response.status, response.text_lossy());
//! # Ok(())
//! # }
//! ```

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `async` (default) or `blocking`.");

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod params;
pub mod request_hook;
pub mod transport;
pub mod types;
pub(crate) mod util;

pub use auth::{ApiToken, SecretString};
pub use client::*;
pub use error::{Error, ErrorKind, Result, TransportErrorKind};
pub use params::{JsonBody, QueryParams};
pub use request_hook::{RequestHook, RequestHookContext};
pub use transport::request::{Request, Response};
pub use types::*;
