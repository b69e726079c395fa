// src/api/mod.rs
pub mod client;
pub mod query;
pub mod transport;
pub mod types;

pub use client::{CertspotterClient, DEFAULT_ENDPOINT};
pub use query::build_query;
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
pub use types::{Certificate, Issuance, Issuer, Operator, PubKey, Revocation, next_position};
