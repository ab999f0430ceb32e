//! HTTP implementation of [`WarpApi`] backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use crate::api::keys::{Keypair, parse_key_material};
use crate::api::register::RegistrationRequest;
use crate::api::{ApiError, WarpApi};
use crate::constants::{CF_CLIENT_VERSION, CLIENT_USER_AGENT};
use crate::endpoint::EndpointList;
use crate::models::AccountData;

/// Maximum time for any single remote call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed client for the three remote services.
pub struct HttpApi {
    client: reqwest::Client,
    key_url: String,
    register_url: String,
    endpoint_url: String,
}

impl HttpApi {
    /// Build a client for the given service URLs.
    pub fn new(key_url: String, register_url: String, endpoint_url: String) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            key_url,
            register_url,
            endpoint_url,
        })
    }

    /// Send a GET and return the response after a status check.
    async fn get(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl WarpApi for HttpApi {
    async fn fetch_keys(&self) -> Result<Keypair, ApiError> {
        let body = self
            .get(&self.key_url)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Request {
                url: self.key_url.clone(),
                source: e,
            })?;

        parse_key_material(&body)
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AccountData, ApiError> {
        let url = &self.register_url;
        let response = self
            .client
            .post(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("CF-Client-Version", CF_CLIENT_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                url: url.clone(),
                status: response.status(),
            });
        }

        response.json().await.map_err(|e| ApiError::Parse {
            url: url.clone(),
            message: e.to_string(),
        })
    }

    async fn fetch_endpoints(&self) -> Result<EndpointList, ApiError> {
        let url = self.endpoint_url.clone();
        self.get(&url)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse {
                url,
                message: e.to_string(),
            })
    }
}
