//! Remote service clients: key fetcher, account issuer, endpoint list.
//!
//! The pipeline talks to the outside world only through the [`WarpApi`]
//! trait so tests can substitute a canned implementation.

pub mod client;
pub mod keys;
pub mod register;

use async_trait::async_trait;
use thiserror::Error;

use crate::endpoint::EndpointList;
use crate::models::AccountData;
use keys::Keypair;
use register::RegistrationRequest;

/// Errors from the remote services.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("key material is missing a `{0}:` line")]
    MissingKey(&'static str),

    #[error("failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },
}

/// The three remote calls the pipeline makes.
#[async_trait]
pub trait WarpApi: Send + Sync {
    /// Fetch a pre-generated keypair from the key service.
    async fn fetch_keys(&self) -> Result<Keypair, ApiError>;

    /// Register a device identity and receive an account payload.
    async fn register(&self, request: &RegistrationRequest) -> Result<AccountData, ApiError>;

    /// Fetch the public list of candidate endpoints.
    async fn fetch_endpoints(&self) -> Result<EndpointList, ApiError>;
}
