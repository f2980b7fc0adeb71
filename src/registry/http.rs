use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::registry::{HttpClient, HttpResponse};

/// Blocking reqwest-backed [HttpClient]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Build a client with a whole-request timeout; a timeout surfaces as an
    /// ordinary `Http` error.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(ReqwestClient { client })
    }
}

impl HttpClient for ReqwestClient {
    fn fetch(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
