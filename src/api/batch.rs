use crate::transport::request::{Request, Response};
use crate::types::batch::batch_body;
use crate::{BatchRequest, Error};

fn batch_request(requests: &[BatchRequest]) -> Request {
    Request::post(["batch"]).json(batch_body(requests))
}

/// `POST /batch`: up to 50 API calls in one request.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct BatchService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl BatchService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// Sends `requests` as one batch; each result is in `responses[]` of the body.
    pub async fn request(&self, requests: &[BatchRequest]) -> Result<Response, Error> {
        self.client.send(batch_request(requests)).await
    }
}

/// `POST /batch` (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingBatchService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingBatchService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// Sends `requests` as one batch; each result is in `responses[]` of the body.
    pub fn request(&self, requests: &[BatchRequest]) -> Result<Response, Error> {
        self.client.send(batch_request(requests))
    }
}
