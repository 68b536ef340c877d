//! Scripted transport for unit tests.

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::{
    error::TransportError,
    transport::{HttpResponse, HttpTransport},
};

/// Replays queued responses in order and records every requested URL.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond_json(self, status: StatusCode, body: serde_json::Value) -> Self {
        self.respond(Ok(HttpResponse::new(status, body.to_string())))
    }

    pub(crate) fn respond_raw(self, status: StatusCode, body: &str) -> Self {
        self.respond(Ok(HttpResponse::new(status, body)))
    }

    pub(crate) fn respond(self, response: Result<HttpResponse, TransportError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {url}"))
    }
}

/// Never answers; used to exercise cancellation.
#[derive(Debug, Default)]
pub(crate) struct PendingTransport;

#[async_trait]
impl HttpTransport for PendingTransport {
    async fn get(&self, _url: Url) -> Result<HttpResponse, TransportError> {
        std::future::pending().await
    }
}

/// Value of query parameter `key`, if present.
pub(crate) fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}
