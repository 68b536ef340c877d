//! The HTTP seam the clients talk through.
//!
//! The clients only need "GET this URL, tell me whether it worked, give me the
//! body as JSON", so that is all [`HttpTransport`] exposes. Production code
//! uses [`ReqwestTransport`]; tests script responses instead.

use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// Body excerpt for log messages.
    pub fn body_excerpt(&self) -> String {
        truncate_body(&self.body)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Build a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self { http })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_derived_from_status() {
        assert!(HttpResponse::new(StatusCode::OK, "{}").is_success());
        assert!(!HttpResponse::new(StatusCode::TOO_MANY_REQUESTS, "").is_success());
        assert!(!HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "").is_success());
    }

    #[test]
    fn json_decodes_body() {
        let res = HttpResponse::new(StatusCode::OK, r#"{"a": 1}"#);
        let value: serde_json::Value = res.json().expect("valid json");
        assert_eq!(value["a"], 1);

        let bad = HttpResponse::new(StatusCode::OK, "<html>");
        assert!(bad.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundaries() {
        let body = "é".repeat(300);
        let excerpt = HttpResponse::new(StatusCode::OK, body).body_excerpt();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), 203);

        assert_eq!(truncate_body("short"), "short");
    }
}
