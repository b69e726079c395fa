// src/api/client.rs
use reqwest::header::{AUTHORIZATION, HeaderValue, RETRY_AFTER};
use reqwest::{Method, Request, StatusCode, Url};
use std::sync::Arc;
use tracing::{debug, warn};

use super::query::build_query;
use super::transport::{HttpTransport, TransportResponse};
use super::types::Issuance;
use crate::domain::is_dns_name;
use crate::error::{CertspotterError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.certspotter.com/v1/issuances";

/// Client for the Cert Spotter issuances API
///
/// Each call performs exactly one request. Rate limits and other failures are
/// returned to the caller; nothing is retried here.
pub struct CertspotterClient {
    endpoint: String,
    token: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl CertspotterClient {
    /// Create a client for `endpoint`. The endpoint must be an absolute URL.
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint)?;

        Ok(Self {
            endpoint,
            token: None,
            transport,
        })
    }

    /// Authenticate requests with a bearer token. An empty token means anonymous access.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch issuances for `domain` with ids strictly greater than `position`
    /// (`0` starts from the beginning).
    /// Endpoint: GET {endpoint}?expand=...&domain={domain}[&after=..][&match_wildcards=true][&include_subdomains=true]
    pub async fn get_issuances(
        &self,
        domain: &str,
        match_wildcards: bool,
        include_subdomains: bool,
        position: u64,
    ) -> Result<Vec<Issuance>> {
        if !is_dns_name(domain) {
            return Err(CertspotterError::InvalidDomain(domain.to_string()));
        }

        let query = build_query(domain, match_wildcards, include_subdomains, position);
        let request = self.build_request(&query)?;

        debug!("Fetching issuances from {}{}", self.endpoint, query);

        let response = self.transport.execute(request).await?;
        let body = Self::check_status(response)?;

        let issuances: Vec<Issuance> = serde_json::from_slice(&body)?;

        debug!("Received {} issuances for {}", issuances.len(), domain);

        Ok(issuances)
    }

    fn build_request(&self, query: &str) -> Result<Request> {
        let url = Url::parse(&format!("{}{}", self.endpoint, query))?;
        let mut request = Request::new(Method::GET, url);

        if let Some(ref token) = self.token {
            // A token that can't form a header value is a transport-level failure
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| anyhow::anyhow!("Invalid API token: {}", e))?;
            value.set_sensitive(true);
            request.headers_mut().insert(AUTHORIZATION, value);
        }

        Ok(request)
    }

    fn check_status(response: TransportResponse) -> Result<Vec<u8>> {
        match response.status {
            StatusCode::OK => Ok(response.body),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers
                    .get(RETRY_AFTER)
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .unwrap_or_default();

                warn!("Rate limited by Cert Spotter API, Retry-After: {:?}", retry_after);
                Err(CertspotterError::RateLimited { retry_after })
            }
            status => Err(CertspotterError::UnexpectedStatus(status.as_u16())),
        }
    }
}
