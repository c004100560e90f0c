//! Scripted mock remote for testing
//!
//! Responds from a fixed table of bodies and statuses, and records every
//! request so tests can assert on exactly how many network calls a
//! pipeline step issued.

use parking_lot::Mutex;
use std::collections::HashMap;

use super::{FetchError, FetchResult, Remote};

enum Scripted {
    Body(Vec<u8>),
    Status(u16),
}

/// Mock remote for testing.
///
/// URLs without a scripted response answer with HTTP 404.
#[derive(Default)]
pub struct MockRemote {
    responses: HashMap<String, Scripted>,
    requests: Mutex<Vec<String>>,
}

impl MockRemote {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response body for `url`.
    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(url.to_string(), Scripted::Body(body.into()));
        self
    }

    /// Script an HTTP error status for `url`.
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Scripted::Status(status));
        self
    }

    /// Total number of requests issued.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Number of requests issued for one URL.
    pub fn requests_for(&self, url: &str) -> usize {
        self.requests.lock().iter().filter(|u| *u == url).count()
    }
}

impl Remote for MockRemote {
    fn get(&self, url: &str) -> FetchResult<Vec<u8>> {
        self.requests.lock().push(url.to_string());
        match self.responses.get(url) {
            Some(Scripted::Body(bytes)) => Ok(bytes.clone()),
            Some(Scripted::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
