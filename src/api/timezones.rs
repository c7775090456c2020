use crate::Error;
use crate::transport::request::{Request, Response};

fn list_request() -> Request {
    Request::get(["timezones"])
}

/// `GET /timezones`
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct TimezonesService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl TimezonesService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// Lists the timezones accepted by campaign schedules.
    pub async fn list(&self) -> Result<Response, Error> {
        self.client.send(list_request()).await
    }
}

/// `GET /timezones` (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingTimezonesService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingTimezonesService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// Lists the timezones accepted by campaign schedules.
    pub fn list(&self) -> Result<Response, Error> {
        self.client.send(list_request())
    }
}
