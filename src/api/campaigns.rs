use crate::transport::request::{Request, Response};
use crate::{CampaignActivity, CampaignDraft, CampaignId, Error, ListCampaigns, ScheduleCampaign};

fn list_request(params: &ListCampaigns) -> Request {
    Request::get(["campaigns"]).query(params.query())
}

fn create_request(draft: &CampaignDraft) -> Request {
    Request::post(["campaigns"]).json(draft.body(true))
}

fn update_request(id: &CampaignId, draft: &CampaignDraft) -> Request {
    Request::put(["campaigns", id.as_str()]).json(draft.body(false))
}

fn fetch_request(id: &CampaignId) -> Request {
    Request::get(["campaigns", id.as_str()])
}

fn schedule_request(id: &CampaignId, params: &ScheduleCampaign) -> Request {
    Request::post(["campaigns", id.as_str(), "schedule"]).json(params.body())
}

fn cancel_request(id: &CampaignId) -> Request {
    Request::post(["campaigns", id.as_str(), "cancel"])
}

fn delete_request(id: &CampaignId) -> Request {
    Request::delete(["campaigns", id.as_str()])
}

fn activity_request(id: &CampaignId, params: &CampaignActivity) -> Request {
    Request::post(["campaigns", id.as_str(), "reports", "subscriber-activity"])
        .json(params.body())
}

fn languages_request() -> Request {
    Request::get(["campaigns", "languages"])
}

/// MailerLite campaigns APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct CampaignsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl CampaignsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl CampaignsService {
    /// `GET /campaigns`
    pub async fn list(&self, params: &ListCampaigns) -> Result<Response, Error> {
        self.client.send(list_request(params)).await
    }

    /// `POST /campaigns`
    pub async fn create(&self, draft: &CampaignDraft) -> Result<Response, Error> {
        self.client.send(create_request(draft)).await
    }

    /// `PUT /campaigns/<id>`; the campaign type is not sent.
    pub async fn update(
        &self,
        id: impl Into<CampaignId>,
        draft: &CampaignDraft,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), draft)).await
    }

    /// `GET /campaigns/<id>`
    pub async fn fetch(&self, id: impl Into<CampaignId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into())).await
    }

    /// `POST /campaigns/<id>/schedule`
    pub async fn schedule(
        &self,
        id: impl Into<CampaignId>,
        params: &ScheduleCampaign,
    ) -> Result<Response, Error> {
        self.client.send(schedule_request(&id.into(), params)).await
    }

    /// `POST /campaigns/<id>/cancel`
    pub async fn cancel(&self, id: impl Into<CampaignId>) -> Result<Response, Error> {
        self.client.send(cancel_request(&id.into())).await
    }

    /// `DELETE /campaigns/<id>`
    pub async fn delete(&self, id: impl Into<CampaignId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into())).await
    }

    /// `POST /campaigns/<id>/reports/subscriber-activity`
    pub async fn activity(
        &self,
        id: impl Into<CampaignId>,
        params: &CampaignActivity,
    ) -> Result<Response, Error> {
        self.client.send(activity_request(&id.into(), params)).await
    }

    /// `GET /campaigns/languages`
    pub async fn languages(&self) -> Result<Response, Error> {
        self.client.send(languages_request()).await
    }
}

/// MailerLite campaigns APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingCampaignsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingCampaignsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingCampaignsService {
    /// `GET /campaigns`
    pub fn list(&self, params: &ListCampaigns) -> Result<Response, Error> {
        self.client.send(list_request(params))
    }

    /// `POST /campaigns`
    pub fn create(&self, draft: &CampaignDraft) -> Result<Response, Error> {
        self.client.send(create_request(draft))
    }

    /// `PUT /campaigns/<id>`
    pub fn update(
        &self,
        id: impl Into<CampaignId>,
        draft: &CampaignDraft,
    ) -> Result<Response, Error> {
        self.client.send(update_request(&id.into(), draft))
    }

    /// `GET /campaigns/<id>`
    pub fn fetch(&self, id: impl Into<CampaignId>) -> Result<Response, Error> {
        self.client.send(fetch_request(&id.into()))
    }

    /// `POST /campaigns/<id>/schedule`
    pub fn schedule(
        &self,
        id: impl Into<CampaignId>,
        params: &ScheduleCampaign,
    ) -> Result<Response, Error> {
        self.client.send(schedule_request(&id.into(), params))
    }

    /// `POST /campaigns/<id>/cancel`
    pub fn cancel(&self, id: impl Into<CampaignId>) -> Result<Response, Error> {
        self.client.send(cancel_request(&id.into()))
    }

    /// `DELETE /campaigns/<id>`
    pub fn delete(&self, id: impl Into<CampaignId>) -> Result<Response, Error> {
        self.client.send(delete_request(&id.into()))
    }

    /// `POST /campaigns/<id>/reports/subscriber-activity`
    pub fn activity(
        &self,
        id: impl Into<CampaignId>,
        params: &CampaignActivity,
    ) -> Result<Response, Error> {
        self.client.send(activity_request(&id.into(), params))
    }

    /// `GET /campaigns/languages`
    pub fn languages(&self) -> Result<Response, Error> {
        self.client.send(languages_request())
    }
}
