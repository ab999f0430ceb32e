//! Registration request body for the account-issuance endpoint.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::identity::Identity;

/// JSON body POSTed to the issuance endpoint.
///
/// `model` and `locale` are fixed values the service expects from the
/// desktop client; `serial_number` repeats the install id.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    pub key: String,
    pub install_id: String,
    pub fcm_token: String,
    /// Terms-of-service acceptance timestamp, RFC 3339 with milliseconds.
    pub tos: String,
    pub model: String,
    pub serial_number: String,
    pub locale: String,
}

impl RegistrationRequest {
    /// Build a request for the given public key and fabricated identity,
    /// accepting the terms of service as of now.
    pub fn new(public_key: &str, identity: &Identity) -> Self {
        Self {
            key: public_key.to_string(),
            install_id: identity.install_id.clone(),
            fcm_token: identity.fcm_token.clone(),
            tos: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            model: "PC".to_string(),
            serial_number: identity.install_id.clone(),
            locale: "de_DE".to_string(),
        }
    }
}
