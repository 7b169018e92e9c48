//! Crate-wide error type.
//!
//! Mirrors the failure taxonomy of the scraping pipeline: transport and
//! HTTP-status failures from the network layer, and structural parse
//! failures from the extraction engine. Field-level extraction gaps are
//! *not* errors: missing optional data degrades to absent values at the
//! extraction site and never reaches this type.

use thiserror::Error;

/// Scraping pipeline errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("structured data missing or malformed: {0}")]
    StructuredData(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
