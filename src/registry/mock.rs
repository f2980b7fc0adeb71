use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{PubverError, Result};
use crate::registry::{HttpClient, HttpResponse};

/// Canned-response HTTP client that records every requested URL
#[derive(Debug, Default)]
pub struct MockHttpClient {
    responses: HashMap<String, HttpResponse>,
    requests: RefCell<Vec<String>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GETs of `url` with `response`
    pub fn with_response(mut self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.responses.insert(url.into(), response);
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for MockHttpClient {
    fn fetch(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| PubverError::registry(format!("No route to {}", url)))
    }
}
