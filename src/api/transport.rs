// src/api/transport.rs
//! HTTP transport abstraction used by the client

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Fully-read HTTP response handed back by a transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Performs a single request/response exchange.
///
/// Production code uses [`ReqwestTransport`]; tests substitute canned responses.
/// Any deadline or timeout policy belongs to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<TransportResponse>;
}

/// Transport backed by a `reqwest::Client`
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(concat!("certspotter-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client, keeping its configuration
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<TransportResponse> {
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(anyhow::Error::from)?
            .to_vec();

        debug!("Received {} ({} bytes)", status, body.len());

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(5));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_transport_response_defaults() {
        let response = TransportResponse::new(StatusCode::OK, "[]");
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.headers.is_empty());
        assert_eq!(response.body, b"[]".to_vec());
    }
}
