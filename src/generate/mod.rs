//! The credential-to-config pipeline.
//!
//! One linear sequence per invocation: fetch a keypair, fabricate a device
//! identity, register it with the issuance service, select an endpoint, and
//! flatten the result into a [`ConnectionProfile`]. Nothing outlives the
//! call and nothing is mutated after construction.

use thiserror::Error;

use crate::api::register::RegistrationRequest;
use crate::api::{ApiError, WarpApi};
use crate::endpoint;
use crate::identity::Identity;
use crate::models::{ConnectionProfile, ProfileError};

/// Errors from the generation pipeline.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Run the pipeline and produce a fresh connection profile.
///
/// `endpoint_override` skips the endpoint-list fetch entirely; otherwise a
/// random candidate is selected with fallback semantics (see
/// [`endpoint::select`]).
pub async fn run(
    api: &dyn WarpApi,
    endpoint_override: Option<&str>,
    quiet: bool,
) -> Result<ConnectionProfile, GenerateError> {
    let keypair = api.fetch_keys().await?;
    let identity = Identity::generate();

    let request = RegistrationRequest::new(&keypair.public_key, &identity);
    let account = api.register(&request).await?;

    let endpoint = match endpoint_override {
        Some(endpoint) => endpoint.to_string(),
        None => endpoint::select(api, quiet).await,
    };

    let profile = ConnectionProfile::from_account(&account, &keypair.private_key, &endpoint)?;
    Ok(profile)
}
