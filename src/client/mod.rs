//! Client implementations (async + optional blocking).

#[cfg(feature = "async")]
pub mod async_client;
#[cfg(feature = "blocking")]
pub mod blocking_client;
pub(crate) mod shared;

#[cfg(feature = "async")]
pub use async_client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use blocking_client::{BlockingClient, BlockingClientBuilder};
pub use shared::{API_TOKEN_ENV, API_URL_ENV, DEFAULT_BASE_URL};
