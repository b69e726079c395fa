// src/error.rs
use thiserror::Error;

/// Errors returned by [`crate::api::CertspotterClient`]
#[derive(Error, Debug)]
pub enum CertspotterError {
    /// The domain is not a valid DNS name. No request was sent.
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Failure inside the HTTP transport (connect, DNS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),

    /// HTTP 429. `retry_after` is the raw Retry-After header, empty when absent.
    #[error("Rate limited by Cert Spotter API (Retry-After: {retry_after})")]
    RateLimited { retry_after: String },

    #[error("Unexpected status code from Cert Spotter API: {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to decode issuances: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CertspotterError>;
