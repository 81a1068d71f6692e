//! Error types for Shipyard.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`] through
//! `#[from]` so they can be propagated with `?`. Read-path operations (catalog listing,
//! snapshot loading) never return these to the client; they log them and degrade to
//! partial results instead.

pub mod config;
pub mod draft;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, draft::DraftError, store::StoreError};

/// Main error type for Shipyard.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid catalog URL or favorite list).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Local override store error (malformed entry, backend failure).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// A spacecraft draft failed its presence checks.
    #[error(transparent)]
    DraftError(#[from] DraftError),
    /// The remote catalog answered with a non-success status code.
    #[error("Request to {url} failed with status {status}")]
    UnexpectedStatus { url: String, status: u16 },
    /// HTTP transport error (connection refused, invalid body, timeout).
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// JSON encoding or decoding error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
