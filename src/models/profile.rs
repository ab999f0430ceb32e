//! The assembled connection profile: everything the formatters need,
//! flattened out of the account payload.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use thiserror::Error;

use crate::models::AccountData;

/// Errors building a profile from an account payload.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("account payload contains no peers")]
    MissingPeer,

    #[error("client_id is not valid base64: {0}")]
    InvalidClientId(#[from] base64::DecodeError),

    #[error("client_id decodes to {0} byte(s), need at least 3 for the reserved parameter")]
    ClientIdTooShort(usize),
}

/// A fully resolved connection profile.
///
/// Built once per run and never mutated afterwards; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionProfile {
    /// Base64 private key fetched from the key service.
    pub private_key: String,
    /// Public key of the first peer in the account payload.
    pub peer_public_key: String,
    /// Assigned tunnel IPv4 address (bare IP).
    pub address_v4: String,
    /// Assigned tunnel IPv6 address (bare IP).
    pub address_v6: String,
    /// Base64 client identifier, kept for pass-through output.
    pub client_id: String,
    /// First three decoded bytes of `client_id`.
    pub reserved: [u8; 3],
    /// Selected `host:port` endpoint.
    pub endpoint: String,
}

impl ConnectionProfile {
    /// Flatten an account payload into a profile.
    pub fn from_account(
        account: &AccountData,
        private_key: &str,
        endpoint: &str,
    ) -> Result<Self, ProfileError> {
        let peer = account
            .config
            .peers
            .first()
            .ok_or(ProfileError::MissingPeer)?;
        let reserved = decode_reserved(&account.config.client_id)?;

        Ok(Self {
            private_key: private_key.to_string(),
            peer_public_key: peer.public_key.clone(),
            address_v4: account.config.interface.addresses.v4.clone(),
            address_v6: account.config.interface.addresses.v6.clone(),
            client_id: account.config.client_id.clone(),
            reserved,
            endpoint: endpoint.to_string(),
        })
    }

    /// The reserved bytes formatted for the V2Ray URI: decimal values joined
    /// with a pre-encoded comma (`%2C`).
    pub fn reserved_param(&self) -> String {
        self.reserved
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("%2C")
    }
}

/// Decode the base64 `client_id` and take its first three byte values.
pub fn decode_reserved(client_id: &str) -> Result<[u8; 3], ProfileError> {
    let bytes = BASE64.decode(client_id)?;
    if bytes.len() < 3 {
        return Err(ProfileError::ClientIdTooShort(bytes.len()));
    }
    Ok([bytes[0], bytes[1], bytes[2]])
}
