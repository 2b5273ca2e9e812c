//! oncoscan-client
//!
//! HTTP client for the external prediction service. Thin wrapper around
//! `reqwest`: one multipart POST per case, no retries.

pub mod client;
pub mod error;
pub mod service;

pub use client::{ClientConfig, PredictionClient};
pub use error::ClientError;
pub use service::PredictionService;
