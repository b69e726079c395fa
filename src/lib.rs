// src/lib.rs
// Library interface for certspotter-client
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod state;

pub use api::{CertspotterClient, HttpTransport, Issuance, ReqwestTransport};
pub use error::CertspotterError;
